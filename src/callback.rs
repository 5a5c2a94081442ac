//! Redirect-back handling: query parsing and the end-to-end callback step.

use crate::client::OidcClient;
use crate::error::FlowError;
use crate::session::{persist_session, AuthenticatedSession};

pub use hallpass_store::FRONT_CHANNEL_LOGOUT_SENTINEL;

/// Parameters the broker appends to the callback redirect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl CallbackParams {
    /// Parse a callback query string (with or without the leading `?`).
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "code" => params.code = Some(value.into_owned()),
                "error" => params.error = Some(value.into_owned()),
                "error_description" => params.error_description = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }
}

/// Process the redirect-back from the broker: parse the query, run the
/// code exchange, persist the session, and hand back the authenticated
/// session for rendering.
pub async fn process_callback(
    client: &mut OidcClient,
    query: &str,
    redirect_uri: &str,
) -> Result<AuthenticatedSession, FlowError> {
    let params = CallbackParams::from_query(query);

    if let Some(error) = params.error {
        return Err(FlowError::CallbackError {
            error,
            description: params.error_description.unwrap_or_default(),
        });
    }
    let code = params.code.ok_or_else(|| FlowError::CallbackError {
        error: "invalid_callback".to_string(),
        description: "no authorization code in callback query".to_string(),
    })?;

    let outcome = client.handle_callback(&code, redirect_uri).await?;
    let store = client.store().clone();
    Ok(persist_session(&store, &outcome)?)
}

//! Session-scope persistence and restore.

use hallpass_routing::{provider_label_for_email, UNKNOWN_PROVIDER_LABEL};
use hallpass_store::{
    AuthStore, Scope, StoreError, KEY_ACCESS_TOKEN, KEY_IDENTITY, KEY_PROVIDER_LABEL,
};

use crate::claims::Identity;
use crate::client::CallbackOutcome;

/// The restored (or freshly persisted) authenticated session.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedSession {
    pub identity: Identity,
    pub access_token: String,
    /// Display label for the upstream provider. Derived from the email
    /// string, not from verified token claims — display policy only, and
    /// spoofable by whoever controls the email value.
    pub provider_label: String,
}

/// Persist a successful callback outcome to session scope.
///
/// The provider label is re-derived from the returned email here, as an
/// explicit post-processing step kept out of token normalization.
pub fn persist_session(
    store: &AuthStore,
    outcome: &CallbackOutcome,
) -> Result<AuthenticatedSession, StoreError> {
    let provider_label = outcome
        .identity
        .email
        .as_deref()
        .map(provider_label_for_email)
        .unwrap_or(UNKNOWN_PROVIDER_LABEL);

    store.put(KEY_ACCESS_TOKEN, &outcome.tokens.access_token)?;
    store.put_json(KEY_IDENTITY, &outcome.identity)?;
    store.put(KEY_PROVIDER_LABEL, provider_label)?;

    Ok(AuthenticatedSession {
        identity: outcome.identity.clone(),
        access_token: outcome.tokens.access_token.clone(),
        provider_label: provider_label.to_string(),
    })
}

/// Restore the authenticated session at app start.
///
/// Yields `None` when there is no session. A corrupt or half-missing
/// record clears session scope and also yields `None` — corruption never
/// surfaces as an error.
pub fn restore_session(store: &AuthStore) -> Option<AuthenticatedSession> {
    let identity: Identity = store.get_json(KEY_IDENTITY)?;
    let access_token = match store.get(KEY_ACCESS_TOKEN) {
        Some(token) => token,
        None => {
            tracing::warn!("identity present without access token; clearing session");
            store.clear(Scope::Session);
            return None;
        }
    };
    let provider_label = store
        .get(KEY_PROVIDER_LABEL)
        .unwrap_or_else(|| UNKNOWN_PROVIDER_LABEL.to_string());

    Some(AuthenticatedSession {
        identity,
        access_token,
        provider_label,
    })
}

//! Broker client settings.

use std::time::Duration;

use crate::error::FlowError;

/// Default bound on each network round-trip (token exchange, userinfo).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for one broker realm/client pair.
///
/// Loading these from the environment is the host's concern; the client
/// only validates that they are present before acting.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    /// Broker origin, e.g. `https://id.example.com` (no trailing slash).
    pub base_url: String,
    /// Realm name under the broker.
    pub realm: String,
    /// OAuth client id registered with the broker.
    pub client_id: String,
    /// Where logout lands when no broker redirect applies.
    pub app_root: String,
    /// Bound applied to token-exchange and userinfo calls.
    pub request_timeout: Duration,
}

impl BrokerConfig {
    pub fn new(
        base_url: impl Into<String>,
        realm: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            realm: realm.into(),
            client_id: client_id.into(),
            app_root: "/".to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Fail with `NotConfigured` if any required setting is empty.
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.base_url.is_empty() {
            return Err(FlowError::NotConfigured {
                missing: "broker base URL",
            });
        }
        if self.realm.is_empty() {
            return Err(FlowError::NotConfigured { missing: "realm" });
        }
        if self.client_id.is_empty() {
            return Err(FlowError::NotConfigured {
                missing: "client id",
            });
        }
        Ok(())
    }
}

//! Broker response payloads and the normalized identity record.
//!
//! Parsing is separated from fetching: these types deserialize bodies the
//! transport already received.

use serde::{Deserialize, Serialize};

/// `provider` value on every identity this client produces. The broker, not
/// the upstream IdP, issues the record.
pub const BROKER_PROVIDER: &str = "broker";

/// Display-name fallback when the broker sends neither `name` nor
/// `preferred_username`.
const FALLBACK_NAME: &str = "User";

/// JSON body of a successful token-endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub id_token: Option<String>,
}

/// The token material a completed exchange hands back to the caller.
#[derive(Debug, Clone)]
pub struct TokenSet {
    /// Opaque bearer credential for the userinfo endpoint and the session.
    pub access_token: String,
    /// Present only when the broker issued one; gates broker-initiated
    /// logout.
    pub id_token: Option<String>,
}

impl From<TokenResponse> for TokenSet {
    fn from(resp: TokenResponse) -> Self {
        Self {
            access_token: resp.access_token,
            id_token: resp.id_token,
        }
    }
}

/// Raw claims from the userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfoClaims {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Normalized user record persisted for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable subject identifier from the broker (`sub`).
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    /// Always [`BROKER_PROVIDER`]. The upstream IdP label is derived
    /// separately from the email domain, not from token claims.
    pub provider: String,
}

impl From<UserInfoClaims> for Identity {
    fn from(claims: UserInfoClaims) -> Self {
        let name = claims
            .name
            .or(claims.preferred_username)
            .unwrap_or_else(|| FALLBACK_NAME.to_string());
        Self {
            id: claims.sub,
            name,
            email: claims.email,
            picture: claims.picture,
            provider: BROKER_PROVIDER.to_string(),
        }
    }
}

//! Stable storage keys and front-channel strings. External contract:
//! these must not change across versions, or existing sessions and
//! in-flight logins break.

/// PKCE code verifier for the in-flight login attempt.
pub const KEY_PKCE_VERIFIER: &str = "hallpass.pkce_verifier";

/// Id token retained between callback and logout.
pub const KEY_ID_TOKEN: &str = "hallpass.id_token";

/// Bearer access token for the authenticated session.
pub const KEY_ACCESS_TOKEN: &str = "hallpass.access_token";

/// Serialized identity record.
pub const KEY_IDENTITY: &str = "hallpass.identity";

/// Resolved upstream-provider display label.
pub const KEY_PROVIDER_LABEL: &str = "hallpass.provider_label";

/// Message the logout-callback page posts to its parent frame when loaded
/// embedded, acknowledging a front-channel logout notification.
pub const FRONT_CHANNEL_LOGOUT_SENTINEL: &str = "hallpass:front-channel-logout";

/// Storage lifetime tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Bounded to one login/logout attempt.
    Transaction,
    /// Spans an authenticated browsing session until explicit logout.
    Session,
}

impl Scope {
    /// Keys owned by this scope.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Scope::Transaction => &[KEY_PKCE_VERIFIER, KEY_ID_TOKEN],
            Scope::Session => &[KEY_ACCESS_TOKEN, KEY_IDENTITY, KEY_PROVIDER_LABEL],
        }
    }
}

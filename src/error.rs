use thiserror::Error;

/// Protocol errors for one authorization attempt.
///
/// Every variant is terminal for the attempt that produced it; there are
/// no automatic retries. The caller decides whether to let the user
/// restart from idle.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Required client settings are absent. Checked before any network or
    /// storage action.
    #[error("Client is not configured: missing {missing}")]
    NotConfigured { missing: &'static str },

    /// Platform secure-random or digest primitive failed. Non-retryable;
    /// the login aborts rather than fall back to a weaker method.
    #[error(transparent)]
    CryptoUnavailable(#[from] hallpass_auth::AuthError),

    /// No persisted verifier for this callback: direct navigation to the
    /// callback URL, cleared storage, or a replayed authorization code.
    #[error("No pending login attempt: the code verifier is missing or already consumed")]
    MissingVerifier,

    /// Broker rejected the code exchange, or the request never produced an
    /// HTTP response (`status` 0: transport failure or timeout).
    #[error("Token exchange failed with status {status}: {body}")]
    TokenExchangeFailed { status: u16, body: String },

    /// Userinfo fetch failed; same `status` convention as
    /// [`FlowError::TokenExchangeFailed`].
    #[error("Userinfo request failed with status {status}: {body}")]
    UserInfoFailed { status: u16, body: String },

    /// The broker redirected back with `error=` instead of a code.
    #[error("Authorization callback returned {error}: {description}")]
    CallbackError { error: String, description: String },

    #[error(transparent)]
    Storage(#[from] hallpass_store::StoreError),
}

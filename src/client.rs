//! The OIDC client: login initiation, callback exchange, logout.

use std::future::Future;
use std::sync::Arc;

use hallpass_auth::{derive_challenge, generate_verifier, validate_verifier};
use hallpass_routing::{hint_for_email, is_valid_email, IdpHint};
use hallpass_store::{AuthStore, Scope, KEY_ID_TOKEN, KEY_PKCE_VERIFIER, KEY_PROVIDER_LABEL};

use crate::claims::{Identity, TokenResponse, TokenSet, UserInfoClaims};
use crate::config::BrokerConfig;
use crate::endpoints;
use crate::error::FlowError;
use crate::transport::{FrameLoader, HttpResponse, HttpTransport, Navigator, TransportError};

// ============================================================================
// State machine
// ============================================================================

/// Where this client instance is in its one authorization attempt.
///
/// The state field doubles as the duplicate-callback guard: once an
/// instance leaves `AwaitingCallback`, a second `handle_callback` is
/// rejected without touching storage or the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    Idle,
    AwaitingCallback,
    Exchanging,
    Authenticated,
    /// Terminal: the user must restart from `Idle` (a fresh instance).
    Failed,
    LoggingOut,
}

/// What a successful callback exchange hands back.
///
/// Session-scope persistence is deliberately left to the caller (see
/// [`crate::session::persist_session`]) so the callback UI controls
/// exactly what is stored and when.
#[derive(Debug, Clone)]
pub struct CallbackOutcome {
    pub tokens: TokenSet,
    pub identity: Identity,
}

// ============================================================================
// OidcClient
// ============================================================================

/// Construction options for [`OidcClient`].
pub struct OidcClientOptions {
    pub config: BrokerConfig,
    pub store: AuthStore,
    pub transport: Arc<dyn HttpTransport>,
    pub navigator: Arc<dyn Navigator>,
    pub frames: Arc<dyn FrameLoader>,
}

/// Drives one authorization attempt against the broker.
///
/// One instance per page load. The full-page redirects in
/// `initiate_login` and `logout` are process-terminating: nothing after
/// them is relied upon, and resumption is a fresh page load reading
/// persisted storage.
pub struct OidcClient {
    config: BrokerConfig,
    store: AuthStore,
    transport: Arc<dyn HttpTransport>,
    navigator: Arc<dyn Navigator>,
    frames: Arc<dyn FrameLoader>,
    state: AttemptState,
}

impl OidcClient {
    pub fn new(options: OidcClientOptions) -> Self {
        Self {
            config: options.config,
            store: options.store,
            transport: options.transport,
            navigator: options.navigator,
            frames: options.frames,
            state: AttemptState::Idle,
        }
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn store(&self) -> &AuthStore {
        &self.store
    }

    /// Begin a login attempt: resolve the IdP hint, generate PKCE
    /// material, persist the verifier, and redirect to the broker.
    ///
    /// # Errors
    /// `NotConfigured` before any storage or network action if required
    /// settings are missing; `CryptoUnavailable` if secure randomness
    /// fails (the attempt aborts, no weaker fallback).
    pub fn initiate_login(
        &mut self,
        redirect_uri: &str,
        scopes: &[&str],
        email: Option<&str>,
    ) -> Result<(), FlowError> {
        self.config.validate()?;

        let idp_hint: Option<IdpHint> = email
            .filter(|e| is_valid_email(e))
            .and_then(hint_for_email);

        let verifier = generate_verifier()?;
        let challenge = derive_challenge(&verifier);
        self.store.put(KEY_PKCE_VERIFIER, &verifier)?;

        let url =
            endpoints::authorization_url(&self.config, redirect_uri, scopes, &challenge, idp_hint)?;

        self.state = AttemptState::AwaitingCallback;
        tracing::debug!(hint = ?idp_hint.map(IdpHint::as_str), "redirecting to broker authorization endpoint");
        self.navigator.navigate(url.as_str());
        Ok(())
    }

    /// Exchange the authorization code for tokens and fetch the identity.
    ///
    /// Consumes the persisted verifier exactly once; a second invocation
    /// on this instance (or with the verifier already gone) fails fast
    /// with `MissingVerifier` — authorization codes are single-use.
    pub async fn handle_callback(
        &mut self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<CallbackOutcome, FlowError> {
        if !matches!(
            self.state,
            AttemptState::Idle | AttemptState::AwaitingCallback
        ) {
            return Err(FlowError::MissingVerifier);
        }
        self.state = AttemptState::Exchanging;

        let result = self.exchange(code, redirect_uri).await;
        match result {
            Ok(outcome) => {
                self.state = AttemptState::Authenticated;
                Ok(outcome)
            }
            Err(e) => {
                self.state = AttemptState::Failed;
                Err(e)
            }
        }
    }

    async fn exchange(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<CallbackOutcome, FlowError> {
        let verifier = self
            .store
            .take(KEY_PKCE_VERIFIER)
            .ok_or(FlowError::MissingVerifier)?;
        if let Err(e) = validate_verifier(&verifier) {
            tracing::warn!(error = %e, "persisted verifier is unusable");
            return Err(FlowError::MissingVerifier);
        }

        let token_url = endpoints::token_url(&self.config)?;
        let body = endpoints::token_request_body(&self.config, code, redirect_uri, &verifier);
        let resp = self
            .bounded(self.transport.post_form(token_url.as_str(), &body))
            .await
            .map_err(|(status, body)| FlowError::TokenExchangeFailed { status, body })?;
        if !resp.is_success() {
            return Err(FlowError::TokenExchangeFailed {
                status: resp.status,
                body: resp.body,
            });
        }
        let tokens: TokenResponse =
            serde_json::from_str(&resp.body).map_err(|_| FlowError::TokenExchangeFailed {
                status: resp.status,
                body: resp.body.clone(),
            })?;

        // Retained past the attempt: logout is the continuation of this
        // security context and needs the id token as a hint.
        if let Some(id_token) = &tokens.id_token {
            self.store.put(KEY_ID_TOKEN, id_token)?;
        }

        let userinfo_url = endpoints::userinfo_url(&self.config)?;
        let resp = self
            .bounded(
                self.transport
                    .get_bearer(userinfo_url.as_str(), &tokens.access_token),
            )
            .await
            .map_err(|(status, body)| FlowError::UserInfoFailed { status, body })?;
        if !resp.is_success() {
            return Err(FlowError::UserInfoFailed {
                status: resp.status,
                body: resp.body,
            });
        }
        let claims: UserInfoClaims =
            serde_json::from_str(&resp.body).map_err(|_| FlowError::UserInfoFailed {
                status: resp.status,
                body: resp.body.clone(),
            })?;

        let identity = Identity::from(claims);
        tracing::debug!(subject = %identity.id, "callback exchange complete");
        Ok(CallbackOutcome {
            tokens: tokens.into(),
            identity,
        })
    }

    /// End the session locally and at the broker.
    ///
    /// Infallible by design: whatever happens, local storage is cleared
    /// and a navigation target is chosen, so the user is never stranded
    /// in an authenticated-looking local state. With no id token this is
    /// a local-only logout straight to the application root.
    pub fn logout(&mut self) {
        self.state = AttemptState::LoggingOut;

        // Read before clearing; both values are gone afterwards.
        let id_token = self.store.take(KEY_ID_TOKEN);
        let provider_label = self.store.get(KEY_PROVIDER_LABEL);

        self.store.clear(Scope::Session);

        let end_session = id_token
            .as_deref()
            .and_then(|t| endpoints::end_session_url(&self.config, t, &self.config.app_root).ok());

        match end_session {
            Some(url) => {
                // Best-effort upstream termination in an invisible frame.
                // Cross-origin restrictions make success unverifiable, so
                // failures are logged and swallowed.
                if let Some(hint) = provider_label.as_deref().and_then(IdpHint::from_label) {
                    if let Err(e) = self.frames.load(hint.upstream_logout_url()) {
                        tracing::warn!(
                            provider = hint.as_str(),
                            error = %e,
                            "upstream logout frame failed; broker logout proceeds"
                        );
                    }
                }
                self.navigator.navigate(url.as_str());
            }
            None => {
                tracing::debug!("no id token; local-only logout");
                self.navigator.navigate(&self.config.app_root);
            }
        }
    }

    /// Bound a transport call by the configured timeout. A transport
    /// failure or expiry maps to status 0 with a descriptive body.
    async fn bounded<F>(&self, call: F) -> Result<HttpResponse, (u16, String)>
    where
        F: Future<Output = Result<HttpResponse, TransportError>>,
    {
        match tokio::time::timeout(self.config.request_timeout, call).await {
            Ok(Ok(resp)) => Ok(resp),
            Ok(Err(e)) => Err((0, e.to_string())),
            Err(_) => Err((
                0,
                format!(
                    "no response within {} ms",
                    self.config.request_timeout.as_millis()
                ),
            )),
        }
    }
}

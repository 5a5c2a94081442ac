//! Host-provided I/O seams: HTTP transport, navigation, and the invisible
//! logout frame.

use async_trait::async_trait;

// ============================================================================
// HttpTransport — user-provided network layer
// ============================================================================

/// User-implemented HTTP layer for broker calls.
///
/// Browser hosts back this with `fetch`; tests script it. Implementations
/// should not retry — the client treats every failure as terminal for the
/// attempt.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST a form-encoded body (`application/x-www-form-urlencoded`).
    async fn post_form(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError>;

    /// GET with an `Authorization: Bearer {token}` header.
    async fn get_bearer(&self, url: &str, token: &str) -> Result<HttpResponse, TransportError>;
}

/// An HTTP response the transport actually received (any status).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure: the request produced no HTTP response at all.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportError {}

// ============================================================================
// Navigator / FrameLoader — browser side effects
// ============================================================================

/// Full-page navigation.
///
/// Navigating destroys in-memory state: the client treats a call to
/// `navigate` as process-terminating and relies on nothing after it.
/// Resumption is a fresh page load reading persisted storage.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Loads a URL in an invisible, non-navigating embedded frame.
///
/// Used for best-effort upstream logout. Implementations must be
/// fire-and-forget: kick off the load and return without waiting for the
/// frame, bounding any internal wait themselves.
pub trait FrameLoader: Send + Sync {
    fn load(&self, url: &str) -> Result<(), TransportError>;
}

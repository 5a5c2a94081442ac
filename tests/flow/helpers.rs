//! Shared fixtures for the flow tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use hallpass::transport::{FrameLoader, HttpResponse, HttpTransport, Navigator, TransportError};
use hallpass::{BrokerConfig, OidcClient, OidcClientOptions};
use hallpass_store::{AuthStore, MemoryBackend, KEY_ACCESS_TOKEN, KEY_ID_TOKEN};

// ============================================================================
// ScriptedTransport
// ============================================================================

/// Transport that replays scripted responses and logs every call.
pub struct ScriptedTransport {
    token_response: Mutex<Option<HttpResponse>>,
    userinfo_response: Mutex<Option<HttpResponse>>,
    delay: Option<Duration>,
    pub token_calls: Mutex<Vec<(String, String)>>,
    pub userinfo_calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            token_response: Mutex::new(None),
            userinfo_response: Mutex::new(None),
            delay: None,
            token_calls: Mutex::new(Vec::new()),
            userinfo_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_token(self, status: u16, body: &str) -> Self {
        *self.token_response.lock().unwrap() = Some(HttpResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn with_userinfo(self, status: u16, body: &str) -> Self {
        *self.userinfo_response.lock().unwrap() = Some(HttpResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Delay every call, for timeout tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn post_form(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.token_calls
            .lock()
            .unwrap()
            .push((url.to_string(), body.to_string()));
        self.token_response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| TransportError::new("no scripted token response"))
    }

    async fn get_bearer(&self, url: &str, token: &str) -> Result<HttpResponse, TransportError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.userinfo_calls
            .lock()
            .unwrap()
            .push((url.to_string(), token.to_string()));
        self.userinfo_response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| TransportError::new("no scripted userinfo response"))
    }
}

// ============================================================================
// Recording navigation / frames
// ============================================================================

/// Records navigation targets and whether storage was already cleared of
/// tokens at the moment of navigation.
pub struct RecordingNavigator {
    store: AuthStore,
    pub target: Mutex<Option<String>>,
    pub tokens_cleared_at_nav: Mutex<Option<bool>>,
}

impl RecordingNavigator {
    pub fn new(store: AuthStore) -> Self {
        Self {
            store,
            target: Mutex::new(None),
            tokens_cleared_at_nav: Mutex::new(None),
        }
    }

    pub fn target(&self) -> Option<String> {
        self.target.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        let cleared = self.store.get(KEY_ACCESS_TOKEN).is_none()
            && self.store.get(KEY_ID_TOKEN).is_none();
        *self.tokens_cleared_at_nav.lock().unwrap() = Some(cleared);
        *self.target.lock().unwrap() = Some(url.to_string());
    }
}

/// Records frame loads; optionally fails every load.
pub struct RecordingFrames {
    pub loads: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingFrames {
    pub fn new() -> Self {
        Self {
            loads: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            loads: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

impl FrameLoader for RecordingFrames {
    fn load(&self, url: &str) -> Result<(), TransportError> {
        self.loads.lock().unwrap().push(url.to_string());
        if self.fail {
            Err(TransportError::new("frame blocked"))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Fixture
// ============================================================================

pub const REDIRECT_URI: &str = "https://app.example.com/callback";
pub const SCOPES: &[&str] = &["openid", "profile", "email"];

pub struct Fixture {
    pub client: OidcClient,
    pub store: AuthStore,
    pub transport: Arc<ScriptedTransport>,
    pub navigator: Arc<RecordingNavigator>,
    pub frames: Arc<RecordingFrames>,
}

pub fn config() -> BrokerConfig {
    BrokerConfig::new("https://id.example.com", "app", "web-client")
}

pub fn fixture(transport: ScriptedTransport) -> Fixture {
    fixture_with(config(), transport, RecordingFrames::new())
}

pub fn fixture_with(
    config: BrokerConfig,
    transport: ScriptedTransport,
    frames: RecordingFrames,
) -> Fixture {
    let store = AuthStore::new(Arc::new(MemoryBackend::new()));
    let transport = Arc::new(transport);
    let navigator = Arc::new(RecordingNavigator::new(store.clone()));
    let frames = Arc::new(frames);
    let client = OidcClient::new(OidcClientOptions {
        config,
        store: store.clone(),
        transport: transport.clone(),
        navigator: navigator.clone(),
        frames: frames.clone(),
    });
    Fixture {
        client,
        store,
        transport,
        navigator,
        frames,
    }
}

/// Scripted happy-path responses for scenario-style tests.
pub fn happy_transport() -> ScriptedTransport {
    ScriptedTransport::new()
        .with_token(200, r#"{"access_token":"AT1","id_token":"IT1"}"#)
        .with_userinfo(
            200,
            r#"{"sub":"u1","email":"user@gmail.com","name":"U One"}"#,
        )
}

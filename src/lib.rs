//! Brokered OAuth2/OIDC Authorization Code + PKCE login client.
//!
//! Routes users to a federated upstream identity provider chosen from
//! their email domain, via an identity broker with Keycloak-shaped
//! endpoints. The crate owns the protocol core — PKCE exchange, callback
//! handling, scoped session persistence, and coordinated logout — and
//! leaves I/O to host-implemented seams ([`transport::HttpTransport`],
//! [`transport::Navigator`], [`transport::FrameLoader`]).
//!
//! Leaf concerns live in their own crates: `hallpass-auth` (PKCE),
//! `hallpass-routing` (domain → IdP hints), `hallpass-store` (scoped
//! storage).

pub mod callback;
pub mod claims;
pub mod config;
pub mod endpoints;
pub mod session;
pub mod transport;

mod client;
mod error;

pub use callback::{process_callback, CallbackParams, FRONT_CHANNEL_LOGOUT_SENTINEL};
pub use claims::{Identity, TokenSet, UserInfoClaims, BROKER_PROVIDER};
pub use client::{AttemptState, CallbackOutcome, OidcClient, OidcClientOptions};
pub use config::{BrokerConfig, DEFAULT_REQUEST_TIMEOUT};
pub use error::FlowError;
pub use session::{persist_session, restore_session, AuthenticatedSession};

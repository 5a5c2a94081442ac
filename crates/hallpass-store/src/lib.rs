//! Scoped key/value persistence for the brokered login flow.
//!
//! Two storage tiers with distinct lifetimes:
//! - **Transaction scope** — cleared at the end of one login or logout
//!   attempt (PKCE verifier, id token held for logout).
//! - **Session scope** — survives page loads until explicit logout or
//!   corruption (access token, identity record, provider label).
//!
//! Persistence itself is host-provided via [`StorageBackend`] (browser
//! `localStorage`, for instance); [`MemoryBackend`] backs tests and
//! non-browser hosts.

mod backend;
mod error;
mod keys;
mod store;

pub use backend::{MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use keys::{
    Scope, FRONT_CHANNEL_LOGOUT_SENTINEL, KEY_ACCESS_TOKEN, KEY_IDENTITY, KEY_ID_TOKEN,
    KEY_PKCE_VERIFIER, KEY_PROVIDER_LABEL,
};
pub use store::AuthStore;

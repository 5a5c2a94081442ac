//! PKCE (RFC 7636) primitives for the brokered login flow.
//!
//! This crate only generates and derives — the authorization URL and token
//! exchange that consume these values live in the `hallpass` client crate.

mod base64url;
mod error;
mod pkce;

pub use base64url::{base64url_decode, base64url_encode};
pub use error::AuthError;
pub use pkce::{
    derive_challenge, generate_verifier, validate_verifier, VERIFIER_MAX_LEN, VERIFIER_MIN_LEN,
};

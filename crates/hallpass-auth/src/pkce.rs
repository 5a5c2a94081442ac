//! PKCE (RFC 7636) verifier and challenge generation.

use crate::base64url::base64url_encode;
use crate::error::AuthError;
use sha2::{Digest, Sha256};

/// Minimum code verifier length permitted by RFC 7636.
pub const VERIFIER_MIN_LEN: usize = 43;

/// Maximum code verifier length permitted by RFC 7636.
pub const VERIFIER_MAX_LEN: usize = 128;

/// Generate a cryptographically random code verifier (43 characters).
///
/// Produces 32 random bytes encoded as base64url (43 chars). A fresh value
/// is drawn on every call; there is no caching or seeding.
///
/// # Errors
/// Returns `AuthError::CryptoUnavailable` if the platform's secure random
/// source fails. Callers must abort the login attempt rather than fall back
/// to a weaker source.
pub fn generate_verifier() -> Result<String, AuthError> {
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(|e| AuthError::CryptoUnavailable(e.to_string()))?;
    Ok(base64url_encode(&bytes))
}

/// Derive the S256 code challenge from a verifier.
///
/// `challenge = base64url(SHA-256(verifier))`, no padding. Deterministic:
/// the same verifier always yields the same challenge.
pub fn derive_challenge(verifier: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(verifier.as_bytes());
    base64url_encode(&hasher.finalize())
}

/// Check that a verifier has the RFC 7636 length and character set.
///
/// Used before a token exchange to reject verifiers mangled in storage.
pub fn validate_verifier(verifier: &str) -> Result<(), AuthError> {
    let valid_chars = verifier
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_chars || verifier.len() < VERIFIER_MIN_LEN || verifier.len() > VERIFIER_MAX_LEN {
        return Err(AuthError::InvalidVerifier {
            min: VERIFIER_MIN_LEN,
            max: VERIFIER_MAX_LEN,
            got: verifier.len(),
        });
    }
    Ok(())
}

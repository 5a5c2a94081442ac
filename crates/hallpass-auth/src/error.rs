use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Secure random generator unavailable: {0}")]
    CryptoUnavailable(String),

    #[error("Code verifier must be {min}-{max} base64url characters, got {got}")]
    InvalidVerifier { min: usize, max: usize, got: usize },
}

//! PKCE bindings.

use crate::error::to_js_error;
use hallpass_auth::{derive_challenge, generate_verifier, validate_verifier};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = "generateVerifier")]
pub fn wasm_generate_verifier() -> Result<String, JsValue> {
    generate_verifier().map_err(to_js_error)
}

#[wasm_bindgen(js_name = "deriveChallenge")]
pub fn wasm_derive_challenge(verifier: &str) -> String {
    derive_challenge(verifier)
}

#[wasm_bindgen(js_name = "validateVerifier")]
pub fn wasm_validate_verifier(verifier: &str) -> Result<(), JsValue> {
    validate_verifier(verifier).map_err(to_js_error)
}

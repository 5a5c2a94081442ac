//! Domain-routing bindings.

use hallpass_routing::{hint_for_email, is_valid_email, provider_label_for_email, IdpHint};
use wasm_bindgen::prelude::*;

/// Returns the `kc_idp_hint` value for the email's domain, or `undefined`
/// when no mapping exists.
#[wasm_bindgen(js_name = "hintForEmail")]
pub fn wasm_hint_for_email(email: &str) -> Option<String> {
    hint_for_email(email).map(|hint| hint.as_str().to_string())
}

#[wasm_bindgen(js_name = "isValidEmail")]
pub fn wasm_is_valid_email(email: &str) -> bool {
    is_valid_email(email)
}

#[wasm_bindgen(js_name = "providerLabelForEmail")]
pub fn wasm_provider_label_for_email(email: &str) -> String {
    provider_label_for_email(email).to_string()
}

/// Well-known upstream logout URL for a provider label, or `undefined`
/// when the label is not a recognized provider.
#[wasm_bindgen(js_name = "upstreamLogoutUrl")]
pub fn wasm_upstream_logout_url(label: &str) -> Option<String> {
    IdpHint::from_label(label).map(|hint| hint.upstream_logout_url().to_string())
}

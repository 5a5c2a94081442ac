//! Stable storage-key and front-channel contract bindings.

use crate::error::to_js_error;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The stable storage-key contract, as a plain JS object.
#[derive(Serialize)]
struct StorageKeys {
    pkce_verifier: &'static str,
    id_token: &'static str,
    access_token: &'static str,
    identity: &'static str,
    provider_label: &'static str,
}

#[wasm_bindgen(js_name = "storageKeys")]
pub fn wasm_storage_keys() -> Result<JsValue, JsValue> {
    let keys = StorageKeys {
        pkce_verifier: hallpass_store::KEY_PKCE_VERIFIER,
        id_token: hallpass_store::KEY_ID_TOKEN,
        access_token: hallpass_store::KEY_ACCESS_TOKEN,
        identity: hallpass_store::KEY_IDENTITY,
        provider_label: hallpass_store::KEY_PROVIDER_LABEL,
    };
    serde_wasm_bindgen::to_value(&keys).map_err(to_js_error)
}

/// Message the logout-callback page posts to its parent frame during
/// front-channel logout.
#[wasm_bindgen(js_name = "frontChannelLogoutSentinel")]
pub fn wasm_front_channel_logout_sentinel() -> String {
    hallpass_store::FRONT_CHANNEL_LOGOUT_SENTINEL.to_string()
}

//! Login initiation: hint routing, PKCE persistence, authorization URL.

use crate::helpers::{fixture, fixture_with, happy_transport, ScriptedTransport, REDIRECT_URI, SCOPES};
use crate::helpers::RecordingFrames;
use hallpass::{AttemptState, BrokerConfig, FlowError};
use hallpass_auth::derive_challenge;
use hallpass_store::KEY_PKCE_VERIFIER;

#[test]
fn gmail_login_builds_hinted_url_and_persists_verifier() {
    let mut fx = fixture(happy_transport());
    fx.client
        .initiate_login(REDIRECT_URI, SCOPES, Some("user@gmail.com"))
        .unwrap();

    let url = fx.navigator.target().expect("navigated");
    assert!(url.starts_with("https://id.example.com/realms/app/protocol/openid-connect/auth?"));
    assert!(url.contains("kc_idp_hint=google"));
    assert!(url.contains("code_challenge="));
    assert!(url.contains("code_challenge_method=S256"));
    assert!(url.contains("response_type=code"));

    let verifier = fx.store.get(KEY_PKCE_VERIFIER).expect("verifier persisted");
    // The challenge in the URL is derived from the persisted verifier.
    assert!(url.contains(&format!("code_challenge={}", derive_challenge(&verifier))));
    assert_eq!(fx.client.state(), AttemptState::AwaitingCallback);
}

#[test]
fn outlook_email_hints_microsoft() {
    let mut fx = fixture(happy_transport());
    fx.client
        .initiate_login(REDIRECT_URI, SCOPES, Some("user@outlook.com"))
        .unwrap();
    assert!(fx.navigator.target().unwrap().contains("kc_idp_hint=microsoft"));
}

#[test]
fn no_email_means_no_hint() {
    let mut fx = fixture(happy_transport());
    fx.client.initiate_login(REDIRECT_URI, SCOPES, None).unwrap();
    assert!(!fx.navigator.target().unwrap().contains("kc_idp_hint"));
}

#[test]
fn invalid_email_means_no_hint() {
    let mut fx = fixture(happy_transport());
    fx.client
        .initiate_login(REDIRECT_URI, SCOPES, Some("not-an-email"))
        .unwrap();
    assert!(!fx.navigator.target().unwrap().contains("kc_idp_hint"));
}

#[test]
fn unmapped_domain_means_no_hint() {
    let mut fx = fixture(happy_transport());
    fx.client
        .initiate_login(REDIRECT_URI, SCOPES, Some("user@example.org"))
        .unwrap();
    assert!(!fx.navigator.target().unwrap().contains("kc_idp_hint"));
}

#[test]
fn fresh_verifier_per_attempt() {
    let mut fx = fixture(happy_transport());
    fx.client.initiate_login(REDIRECT_URI, SCOPES, None).unwrap();
    let first = fx.store.get(KEY_PKCE_VERIFIER).unwrap();

    let mut fx2 = fixture(ScriptedTransport::new());
    fx2.client.initiate_login(REDIRECT_URI, SCOPES, None).unwrap();
    let second = fx2.store.get(KEY_PKCE_VERIFIER).unwrap();
    assert_ne!(first, second);
}

#[test]
fn missing_config_fails_before_any_side_effect() {
    let mut fx = fixture_with(
        BrokerConfig::new("", "app", "web-client"),
        ScriptedTransport::new(),
        RecordingFrames::new(),
    );
    let err = fx
        .client
        .initiate_login(REDIRECT_URI, SCOPES, Some("user@gmail.com"))
        .unwrap_err();
    assert!(matches!(err, FlowError::NotConfigured { .. }));
    assert_eq!(fx.store.get(KEY_PKCE_VERIFIER), None);
    assert_eq!(fx.navigator.target(), None);
    assert_eq!(fx.client.state(), AttemptState::Idle);
}

//! Keycloak-shaped broker endpoint construction.
//!
//! Pure URL/body builders — no network calls. The endpoint shapes are
//! hardcoded; this client does not consume a discovery document.

use hallpass_routing::IdpHint;
use url::Url;

use crate::config::BrokerConfig;
use crate::error::FlowError;

fn protocol_endpoint(config: &BrokerConfig, leaf: &str) -> Result<Url, FlowError> {
    let raw = format!(
        "{}/realms/{}/protocol/openid-connect/{}",
        config.base_url, config.realm, leaf
    );
    Url::parse(&raw).map_err(|_| FlowError::NotConfigured {
        missing: "valid broker base URL",
    })
}

/// Authorization endpoint with PKCE parameters and optional IdP hint.
pub fn authorization_url(
    config: &BrokerConfig,
    redirect_uri: &str,
    scopes: &[&str],
    code_challenge: &str,
    idp_hint: Option<IdpHint>,
) -> Result<Url, FlowError> {
    let mut url = protocol_endpoint(config, "auth")?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("response_type", "code")
            .append_pair("client_id", &config.client_id)
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("scope", &scopes.join(" "))
            .append_pair("code_challenge", code_challenge)
            .append_pair("code_challenge_method", "S256");
        if let Some(hint) = idp_hint {
            pairs.append_pair("kc_idp_hint", hint.as_str());
        }
    }
    Ok(url)
}

/// Token endpoint URL.
pub fn token_url(config: &BrokerConfig) -> Result<Url, FlowError> {
    protocol_endpoint(config, "token")
}

/// Form-encoded body for the authorization_code grant.
pub fn token_request_body(
    config: &BrokerConfig,
    code: &str,
    redirect_uri: &str,
    code_verifier: &str,
) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "authorization_code")
        .append_pair("client_id", &config.client_id)
        .append_pair("code", code)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("code_verifier", code_verifier)
        .finish()
}

/// Userinfo endpoint URL.
pub fn userinfo_url(config: &BrokerConfig) -> Result<Url, FlowError> {
    protocol_endpoint(config, "userinfo")
}

/// End-session endpoint with id_token_hint and post-logout redirect.
pub fn end_session_url(
    config: &BrokerConfig,
    id_token: &str,
    post_logout_redirect_uri: &str,
) -> Result<Url, FlowError> {
    let mut url = protocol_endpoint(config, "logout")?;
    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("id_token_hint", id_token)
        .append_pair("post_logout_redirect_uri", post_logout_redirect_uri);
    Ok(url)
}

//! Upstream identity providers recognized by the broker, and the static
//! email-domain table that routes to them.

use crate::email::domain_of;
use serde::{Deserialize, Serialize};

/// Display label used when no domain mapping exists.
pub const UNKNOWN_PROVIDER_LABEL: &str = "Unknown Provider";

/// An upstream identity provider the broker can federate to directly.
///
/// The serialized form matches the broker's `kc_idp_hint` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdpHint {
    Google,
    Microsoft,
}

/// Email domains with a known upstream provider. Each domain maps to
/// exactly one hint.
pub const DOMAIN_HINTS: &[(&str, IdpHint)] = &[
    ("gmail.com", IdpHint::Google),
    ("googlemail.com", IdpHint::Google),
    ("outlook.com", IdpHint::Microsoft),
    ("hotmail.com", IdpHint::Microsoft),
    ("live.com", IdpHint::Microsoft),
];

impl IdpHint {
    /// The broker's `kc_idp_hint` value for this provider.
    pub fn as_str(self) -> &'static str {
        match self {
            IdpHint::Google => "google",
            IdpHint::Microsoft => "microsoft",
        }
    }

    /// Human-readable provider name for the UI.
    pub fn label(self) -> &'static str {
        match self {
            IdpHint::Google => "Google",
            IdpHint::Microsoft => "Microsoft",
        }
    }

    /// Reverse of [`IdpHint::label`], used when only the persisted display
    /// label is available (e.g. at logout time).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Google" => Some(IdpHint::Google),
            "Microsoft" => Some(IdpHint::Microsoft),
            _ => None,
        }
    }

    /// Well-known front-channel logout endpoint for the provider.
    ///
    /// Loaded in an invisible frame during logout to encourage upstream
    /// session termination; success is unverifiable cross-origin, so this
    /// is strictly best-effort.
    pub fn upstream_logout_url(self) -> &'static str {
        match self {
            IdpHint::Google => "https://accounts.google.com/Logout",
            IdpHint::Microsoft => "https://login.microsoftonline.com/common/oauth2/v2.0/logout",
        }
    }
}

/// Map an email address to an IdP hint via the static domain table.
///
/// Malformed input (no `@`) and unmapped domains both yield `None`,
/// which means the broker shows its native login chooser.
pub fn hint_for_email(email: &str) -> Option<IdpHint> {
    let domain = domain_of(email)?;
    DOMAIN_HINTS
        .iter()
        .find(|(d, _)| *d == domain)
        .map(|(_, hint)| *hint)
}

/// Display label for the upstream provider behind an email address.
///
/// Display policy only: the label is guessed from the email string, not
/// confirmed by any token claim.
pub fn provider_label_for_email(email: &str) -> &'static str {
    match hint_for_email(email) {
        Some(hint) => hint.label(),
        None => UNKNOWN_PROVIDER_LABEL,
    }
}

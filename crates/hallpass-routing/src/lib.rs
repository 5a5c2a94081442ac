//! Email-domain to identity-provider routing for the brokered login flow.
//!
//! This crate is pure and table-driven: new domain → IdP mappings are added
//! to [`provider::DOMAIN_HINTS`] without touching protocol code. Network
//! calls and token handling live in the `hallpass` client crate.

mod email;
mod provider;

pub use email::{domain_of, is_valid_email};
pub use provider::{
    hint_for_email, provider_label_for_email, IdpHint, DOMAIN_HINTS, UNKNOWN_PROVIDER_LABEL,
};

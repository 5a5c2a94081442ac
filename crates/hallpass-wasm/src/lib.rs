//! WASM bindings for the hallpass login client.
//!
//! Exposes the pure leaf functionality — PKCE material, domain routing,
//! and the stable storage-key contract — via wasm-bindgen for consumption
//! by browser TypeScript. The async client itself stays in Rust hosts;
//! browser code drives the same flow over these primitives.

pub mod auth;
pub mod routing;
pub mod storage;

mod error;

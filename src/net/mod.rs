//! REST client layer: wire types, the error taxonomy, and endpoint helpers.
//!
//! Real HTTP calls (via `gloo-net`) require a browser and are gated behind
//! the `csr` feature; without it the endpoint helpers are stubs that fail
//! with a transport error, so the rest of the crate compiles and tests on
//! the host.

pub mod api;
pub mod error;
pub mod types;

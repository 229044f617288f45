//! # transit-browser
//!
//! Leptos + WASM client for browsing a transit network: sign-in, a paginated
//! route list with schedule drill-down, stop-to-stop trip search, and an
//! on-demand map pop-up showing a vehicle's live position.
//!
//! Browser-only code is gated behind the `csr` feature. With default features
//! the crate compiles on the host: network calls are stubbed and the state
//! machines under [`state`] can be exercised directly by tests.

pub mod app;
pub mod components;
pub mod map;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: set up panic reporting and logging, then mount the
/// application to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}

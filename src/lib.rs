//! # autoshorts-client
//!
//! Leptos + WASM frontend for the AutoShorts faceless-video automation
//! platform. Covers authentication, series and episode management,
//! publishing connections, analytics, and the authenticated API client
//! with transparent token refresh.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the generated bindings after page load.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

//! # client
//!
//! Leptos + WASM frontend for the BeautyBook salon booking platform.
//!
//! This crate contains pages, components, application state, the typed REST
//! client, and the runtime configuration handed over by the SSR host. Pure
//! logic lives in `state` and `util` so it can be tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}

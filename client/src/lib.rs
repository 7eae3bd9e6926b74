//! # client
//!
//! Leptos + WASM frontend for the campus classifieds assistant.
//!
//! This crate contains the floating chatbot widget, its state machine, the
//! HTTP client for the chatbot service, and a small routed app shell used
//! for SSR and hydration.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

//! # imago-client
//!
//! Leptos + WASM project page for the paper "Imago Obscura: An Image Privacy
//! AI Co-pilot to Enable Identification and Mitigation of Risks".
//!
//! This crate contains the page, its region components, the transient page
//! state, the static content records, and small browser helpers (clipboard,
//! window navigation, asset URLs). The `ssr` feature renders it inside the
//! server; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}

//! # client
//!
//! Leptos + WASM front-end for Huellitas, the pet adoption and lost-pet site.
//!
//! This crate contains pages, components, UI state, the route gate, and the
//! browser implementations of the `api-client` seams (`gloo-net` transport and
//! `localStorage` persistence). The server crate renders [`app::App`] with the
//! `ssr` feature; the browser hydrates it with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

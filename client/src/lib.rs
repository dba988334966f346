//! # client
//!
//! Leptos + WASM frontend for authgate.
//!
//! This crate contains the auth context, the gated home page with its login
//! and dashboard screens, and the REST helpers that talk to `server`. The
//! server renders [`app::shell`] for SSR; the browser bundle calls
//! [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating authgate client");
    leptos::mount::hydrate_body(app::App);
}

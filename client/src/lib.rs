//! # client
//!
//! Leptos + WASM frontend for the sign-in form.
//!
//! This crate contains the login and dashboard pages, form and session state,
//! and the attempt runner that drives an `identity::IdentityProvider`.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! # storefront-client
//!
//! Leptos + WASM frontend for the storefront's sign-in flow.
//!
//! The session store, auth service, callback handler and route guard live in
//! the framework-neutral `storefront` crate. This crate binds them to the
//! browser: a `gloo-net` transport, router and `location` navigation, a
//! signal mirror of the session, and toast rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

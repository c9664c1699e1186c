//! # storefront-client
//!
//! Leptos + WASM frontend for the storefront.
//!
//! This crate holds the session store, the route guard, REST helpers for the
//! account endpoints, wire types, and the route-level pages. The `server`
//! crate renders it with SSR and the browser hydrates it through
//! [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

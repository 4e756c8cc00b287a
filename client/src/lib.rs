//! # lurnity-client
//!
//! Leptos frontend for the Lurnity learning platform. Renders the login and
//! signup pages, validates their fields in the browser and hands valid
//! submissions to a local callback.
//!
//! The crate builds twice: with `ssr` it is linked into `lurnity-server` for
//! server rendering, with `hydrate` it compiles to WASM and takes over the
//! server-rendered markup in the browser.

pub mod app;
pub mod components;
pub mod form;
pub mod pages;
pub mod payload;
pub mod routes;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

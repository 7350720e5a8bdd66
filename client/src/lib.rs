//! # client
//!
//! Leptos + WASM frontend for a single-page contact form.
//!
//! The page validates its inputs on blur and submit, remembers the visitor's
//! name, email and theme in `localStorage`, shows a timed success banner and
//! replays a pulse animation on request. All behavior lives in
//! `state::contact::ContactApp`; the view layer only forwards events to it.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}

//! # portal-client
//!
//! Leptos + WASM frontend for the registry console sign-in flow.
//!
//! This crate contains the sign-in page and its controller state machine,
//! the REST collaborators it talks to, and the authenticated landing route.
//! The `harbor-portal` binary renders it on the server (`ssr`) and the
//! browser bundle hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

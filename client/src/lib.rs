//! # client
//!
//! Leptos + WASM frontend for the RAG question-answering service.
//!
//! This crate holds the session store and route guards, the pages for
//! login, signup, document ingest and question answering, and the REST client
//! for the backend. It renders on the server (`ssr`) and hydrates in the
//! browser (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("client: logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}

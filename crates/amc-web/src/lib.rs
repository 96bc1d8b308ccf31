pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod render_context;
pub mod session;

/// Browser entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}

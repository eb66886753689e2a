//! puzzle-solver Web Frontend
//!
//! Leptos-based WASM frontend: pick an image, send it to the solver,
//! list the returned steps.

mod api;
mod app;
mod components;
mod logging;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    match api::root_element() {
        Ok(root) => leptos::mount::mount_to(root, App).forget(),
        Err(e) => tracing::error!("cannot mount app: {}", e),
    }
}

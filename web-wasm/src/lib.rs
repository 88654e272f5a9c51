//! Portfolio front end (Leptos + WASM)

mod app;
mod api;
mod components;
mod dom;
mod ui;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    wasm_bindgen_futures::spawn_local(app::run());
}

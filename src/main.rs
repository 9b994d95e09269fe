//! Order Builder Frontend Entry Point

mod models;
mod config;
mod commands;
mod order;
mod highlight;
mod bom;
mod context;
mod store;
mod components;
mod app;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate; the configured level applies
    // once the config is read
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = shared::config::load_config();
    if let Ok(level) = config.log_level() {
        log::set_max_level(level.to_level_filter());
    }

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

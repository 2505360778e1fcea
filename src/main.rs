mod app;
mod components;
mod config;
mod core;
mod utils;

use app::App;
use leptos::prelude::*;
use pizzashop_core::RouteTable;
use pizzashop_core::config::default_routes;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::LOG_LEVEL) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }

    let table = RouteTable::new(default_routes()).expect("Built-in route table must be valid");
    log::debug!("router: {} routes registered", table.len());

    let root = document()
        .get_element_by_id(config::APP_ELEMENT_ID)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App table=table /> }).forget();
}

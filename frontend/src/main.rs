mod app;
mod components;
mod config;
mod layouts;
mod pages;
mod router;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!(
        "mounting app with {} top-level route(s)",
        router::route_table().records().len()
    );

    let base = config.router_base;
    mount_to_body(move || view! { <App base/> });
}

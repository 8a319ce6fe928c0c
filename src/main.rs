//! Shopping List Frontend Entry Point

mod models;
mod error;
mod config;
mod normalize;
mod codec;
mod location;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_logger::init(config::LOG_LEVEL);
    location::register_service_worker();
    mount_to_body(App);
}

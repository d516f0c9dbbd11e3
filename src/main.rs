//! Alumni Network Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod format;
mod list_state;
mod logging;
mod models;
mod notify;
mod route;
mod seed;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_location();
    logging::init(config.log_level);
    log::info!("[APP] starting, log level {}", config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}

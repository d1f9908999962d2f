mod app;
mod config;
mod core;
mod error;
mod features;
mod logging;
mod models;
mod pages;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = BoardConfig::from_window();
    logging::init(config.level());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting card board");
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

//! Task Board Frontend Entry Point

mod app;
mod clock;
mod components;
mod config;
mod models;
mod store;

use app::TaskBoard;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(config::log_level());
    log::info!("[APP] mounting task board");
    mount_to_body(TaskBoard);
}

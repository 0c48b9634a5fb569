#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use doodle::{AppConfig, DoodleApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = AppConfig::default();

    let title = config.title.clone();
    let tools = config.tools.clone();
    eframe::run_native(
        &title,
        config.native_options(),
        Box::new(move |cc| Ok(Box::new(DoodleApp::new(cc, tools)))),
    )
}

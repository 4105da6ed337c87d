#![allow(warnings)]
//! Todo Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod service;
mod store;
mod view_logic;
mod controller;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("todo page starting");

    mount_to_body(move || view! { <App config=config /> });
}

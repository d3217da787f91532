// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use url_analyzer::{lifecycle, views::App};

fn main() -> anyhow::Result<()> {
    lifecycle::init_logging();

    let gateway = lifecycle::build_gateway().context("Failed to build analysis gateway")?;

    dioxus::LaunchBuilder::new()
        .with_context(gateway)
        .launch(App);

    Ok(())
}

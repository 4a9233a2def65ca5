//! Volley Panel - Volleyball Roster Statistics & Binomial Win Explorer
//!
//! A Rust dashboard for a team's technical roster file.

use anyhow::Context;
use eframe::egui;
use std::path::Path;
use volley_panel::config::{AppConfig, CONFIG_FILE_NAME};
use volley_panel::gui::VolleyApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE_NAME))
        .with_context(|| format!("Failed to load {}", CONFIG_FILE_NAME))?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("Volley Panel"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Volley Panel",
        options,
        Box::new(|cc| Ok(Box::new(VolleyApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {}", e))
}

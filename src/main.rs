mod app;
mod chart;
mod color;
mod config;
mod data;
mod route;
mod state;
mod theme;
mod ui;
mod view;

use std::sync::Arc;

use anyhow::Context;
use app::IrisDashApp;
use config::AppConfig;
use data::loader;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let dataset = match &config.dataset {
        Some(path) => loader::load_file(path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => loader::load_builtin()?,
    };
    log::info!(
        "Loaded {} records ({:?} per species), showing {:?} charts with theme {}",
        dataset.len(),
        dataset.species_counts(),
        config.variant,
        config.theme
    );

    let state = AppState::new(Arc::new(dataset), &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Iris Dashboard",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(IrisDashApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}

mod app;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::FftAverageApp;
use config::AnalysisConfig;
use data::average::average_tables;
use data::loader::load_table;
use data::model::Table;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = AnalysisConfig::default();

    let tables = config
        .inputs
        .iter()
        .map(|path| -> Result<Table> {
            let table = load_table(path)?;
            log::info!("Loaded {} rows from {}", table.len(), path.display());
            Ok(table)
        })
        .collect::<Result<Vec<_>>>()?;

    let series = average_tables(&tables).context("averaging amplitude columns")?;
    log::info!(
        "Averaged '{}' over {} tables, {} rows",
        series.amplitude_label,
        series.table_count,
        series.len()
    );
    if series.is_empty() {
        log::warn!("First table has no data rows; the plot will be empty");
    }
    drop(tables);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(series, &config);
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Ok(Box::new(FftAverageApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running plot window: {e}"))
}

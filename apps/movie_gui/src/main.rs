use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod config;
mod controller;
mod media;
mod ui;

use anyhow::anyhow;
use catalog_client::CatalogClient;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::MovieListApp;

#[derive(Parser, Debug)]
#[command(about = "Browse the catalog's popular movies")]
struct Args {
    /// TOML settings file (defaults to ./movie_list.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the catalog API key from the build, file, and environment.
    #[arg(long)]
    api_key: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(api_key) = args.api_key {
        settings.api_key = api_key;
    }

    let catalog = Arc::new(CatalogClient::new(settings.catalog_config()));
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(catalog, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::app::PAGE_HEADING)
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        ui::app::PAGE_HEADING,
        options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, settings.font_path.as_deref());
            Ok(Box::new(MovieListApp::new(
                cmd_tx,
                ui_rx,
                settings.image_base_url.clone(),
            )))
        }),
    )
    .map_err(|err| anyhow!("movie list window failed: {err}"))
}

#[cfg(test)]
#[path = "tests/scenario_tests.rs"]
mod scenario_tests;

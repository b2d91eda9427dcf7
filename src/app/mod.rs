// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring configuration, logging, and the egui shell.

pub mod config;

use anyhow::Result;
use eframe::egui;
use egui_phosphor::Variant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::logic::clock::Clock;
use crate::models::schema::{PageSchema, demo_page, load_page_schema};
use crate::mvu::PageController;
use crate::ui::FormCheckApp;
use self::config::{AppConfig, DEFAULT_LOG_FILTER};

/// Install the global `tracing` subscriber, honouring `RUST_LOG`.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load the configured schema, falling back to the demo page.
///
/// The returned notice describes why a fallback happened, if it did.
pub fn load_page(config: &AppConfig) -> Result<(PageSchema, Option<String>)> {
    let Some(path) = config.schema_path.as_ref() else {
        return Ok((demo_page()?, None));
    };
    match load_page_schema(path) {
        Ok(page) => {
            info!(path = %path.display(), forms = page.forms.len(), "Loaded form schema");
            Ok((page, None))
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "Falling back to demo forms");
            Ok((demo_page()?, Some(format!("{err:#}. Showing demo forms instead."))))
        }
    }
}

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> Result<()> {
    init_logging();
    let config = AppConfig::from_env();
    let (schema, notice) = load_page(&config)?;
    let page = PageController::bootstrap(&schema, Clock::Utc);

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "formcheck",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(FormCheckApp::new(page).with_notice(notice)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("Failed to run the UI: {err}"))
}

//! Histogram Sculptor - Draggable histogram linked to a normal QQ plot
//!
//! Dragging a bar rewrites its height, the sample is rebuilt from the bar
//! heights and the QQ plot follows.

use anyhow::Context;
use eframe::egui;
use histogram_sculptor::config::AppConfig;
use histogram_sculptor::data::SampleModel;
use histogram_sculptor::gui::SculptorApp;
use log::info;

const TITLE: &str = "Interactive Histogram and QQ Plot";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::default();
    config.validate().context("Invalid startup configuration")?;
    info!("Starting with {}", config.to_log_line()?);

    let model = SampleModel::standard_normal(config.sample_size)?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title(TITLE),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(SculptorApp::new(cc, model, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("Window closed with error: {e}"))
}

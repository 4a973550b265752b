//! Histogram Sculptor Main Application
//! Header strip with sample statistics above the two linked plots.

use crate::config::AppConfig;
use crate::data::SampleModel;
use crate::gui::{ChartViewer, ViewCoordinator};
use crate::stats::SampleSummary;
use egui::{Color32, RichText, TopBottomPanel};
use log::info;

/// Main application window.
pub struct SculptorApp {
    coordinator: ViewCoordinator,
    chart_viewer: ChartViewer,
}

impl SculptorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, model: SampleModel, config: &AppConfig) -> Self {
        info!(
            "Initial sample of {} points in {} bins",
            model.len(),
            config.bin_count
        );
        Self {
            coordinator: ViewCoordinator::new(model, config),
            chart_viewer: ChartViewer::new(),
        }
    }

    /// Draw the statistics strip
    fn show_header(ui: &mut egui::Ui, summary: &SampleSummary) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("📊 Histogram Sculptor")
                    .size(18.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.separator();

            if summary.count == 0 {
                ui.label(RichText::new("Empty sample").color(Color32::GRAY));
                return;
            }

            ui.label(RichText::new(format!("N = {}", summary.count)).strong());
            ui.label(format!("Mean {:.3}", summary.mean));
            ui.label(format!("Median {:.3}", summary.median));
            ui.label(format!("Std {:.3}", summary.std));
            ui.label(format!("Range [{:.3}, {:.3}]", summary.min, summary.max));
            ui.separator();
            ui.label(
                RichText::new("Drag over the histogram to reshape it")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
    }
}

impl eframe::App for SculptorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            Self::show_header(ui, self.coordinator.summary());
            ui.add_space(4.0);
        });

        let events = egui::CentralPanel::default()
            .show(ctx, |ui| self.chart_viewer.show(ui, &self.coordinator))
            .inner;

        // Applied after drawing; each edit requests the repaint that shows it
        let mut repaint = ctx.clone();
        self.coordinator.dispatch_all(events, &mut repaint);
    }
}

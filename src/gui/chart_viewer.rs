//! Chart Viewer Widget
//! Two cards side by side: the editable histogram on the left and the
//! normal quantile plot on the right.

use crate::charts::ChartPlotter;
use crate::data::PointerEvent;
use crate::gui::ViewCoordinator;
use egui::{Color32, RichText};

/// Chart card configuration
const CHART_SPACING: f32 = 15.0;
const CARD_MARGIN: f32 = 12.0;
const TITLE_COLOR: Color32 = Color32::from_rgb(100, 149, 237);

/// Side-by-side layout of both plots.
#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    /// Draw both panes and return the pointer events the histogram received.
    pub fn show(&mut self, ui: &mut egui::Ui, coordinator: &ViewCoordinator) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ui.columns(2, |columns| {
            Self::draw_card(&mut columns[0], "Histogram", |ui| {
                events = ChartPlotter::draw_histogram(ui, coordinator.histogram());
            });
            Self::draw_card(&mut columns[1], "QQ Plot", |ui| {
                if coordinator.quantile_pairs().is_empty() {
                    ui.label(RichText::new("No Data").size(14.0).color(Color32::GRAY));
                }
                ChartPlotter::draw_qq_chart(
                    ui,
                    coordinator.quantile_pairs(),
                    coordinator.reference_line(),
                );
            });
        });

        events
    }

    /// Framed card with a title above its content.
    fn draw_card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(CARD_MARGIN)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(18.0).strong().color(TITLE_COLOR));
                    ui.add_space(CHART_SPACING / 2.0);
                    add_contents(ui);
                });
            });
    }
}

//! Chart Plotter Module
//! Draws the editable histogram and the normal QQ plot with egui_plot.

use crate::data::{PointerEvent, PointerPosition};
use crate::stats::{Histogram, QuantilePair, ReferenceLine};
use egui::{Color32, Event, Pos2, Stroke};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, PlotResponse, Points};

/// Color palette
pub const BAR_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const POINT_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const LINE_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

/// Translate raw pointer input into editor events, one per raw event and in
/// arrival order.
///
/// `locate` maps a screen position to plot coordinates and reports whether
/// it lies inside the plotting area. Only the primary button drives edits.
pub fn pointer_events(
    raw: &[Event],
    locate: impl Fn(Pos2) -> PointerPosition,
) -> Vec<PointerEvent> {
    raw.iter()
        .filter_map(|event| match event {
            Event::PointerMoved(pos) => Some(PointerEvent::Move(locate(*pos))),
            Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => Some(if *pressed {
                PointerEvent::Press(locate(*pos))
            } else {
                PointerEvent::Release
            }),
            Event::PointerGone => Some(PointerEvent::Move(PointerPosition::outside())),
            _ => None,
        })
        .collect()
}

/// Creates the two linked plots.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the histogram and collect this frame's pointer input on it.
    ///
    /// The plot's own pan and zoom are disabled so that pointer drags only
    /// edit bars.
    pub fn draw_histogram(ui: &mut egui::Ui, histogram: &Histogram) -> Vec<PointerEvent> {
        let bars: Vec<Bar> = histogram
            .bins()
            .iter()
            .map(|bin| {
                Bar::new(bin.midpoint(), bin.height)
                    .width(bin.width)
                    .fill(BAR_COLOR)
                    .stroke(Stroke::new(1.0, Color32::BLACK))
            })
            .collect();

        let PlotResponse { transform, .. } = Plot::new("histogram")
            .x_axis_label("Value")
            .y_axis_label("Count")
            .include_y(0.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                if !histogram.is_empty() {
                    plot_ui.bar_chart(BarChart::new(bars).name("Counts"));
                }
            });

        let raw = ui.input(|i| i.events.clone());
        // Presses elsewhere in the window land outside the frame and are ignored
        pointer_events(&raw, |pos| {
            let value = transform.value_from_position(pos);
            PointerPosition {
                x: Some(value.x),
                y: Some(value.y),
                over_surface: transform.frame().contains(pos),
            }
        })
    }

    /// Draw the normal QQ plot: one point per sample value and the fitted
    /// reference line.
    pub fn draw_qq_chart(ui: &mut egui::Ui, pairs: &[QuantilePair], line: Option<ReferenceLine>) {
        Plot::new("qq_plot")
            .x_axis_label("Theoretical Quantiles")
            .y_axis_label("Sample Quantiles")
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                if pairs.is_empty() {
                    return;
                }

                let points: PlotPoints = pairs.iter().map(|p| [p.theoretical, p.sample]).collect();
                plot_ui.points(
                    Points::new(points)
                        .radius(2.0)
                        .color(POINT_COLOR)
                        .name("Ordered Values"),
                );

                if let Some(line) = line {
                    let x0 = pairs[0].theoretical;
                    let x1 = pairs[pairs.len() - 1].theoretical;
                    plot_ui.line(
                        Line::new(PlotPoints::from(vec![[x0, line.at(x0)], [x1, line.at(x1)]]))
                            .color(LINE_COLOR)
                            .width(1.5)
                            .name(format!("Fit (R² = {:.4})", line.r * line.r)),
                    );
                }
            });
    }
}

//! View Coordinator
//! Routes histogram pointer input to the editor and keeps the QQ plot in
//! step with the sample.
//!
//! Every sample replacement is followed by exactly one projection and one
//! redraw request per view, histogram first, before the next event is
//! handled.

use crate::config::AppConfig;
use crate::data::{HistogramEditor, PointerEvent, SampleModel};
use crate::stats::{
    Histogram, PlottingPosition, QuantilePair, QuantileProjector, ReferenceLine, SampleSummary,
};
use log::{debug, info};

/// The two panes of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Histogram,
    Probability,
}

/// Receiver of redraw requests.
pub trait Redraw {
    fn redraw(&mut self, view: View);
}

impl Redraw for egui::Context {
    fn redraw(&mut self, _view: View) {
        // Both panes live in the same viewport
        self.request_repaint();
    }
}

/// Owns the sample and everything derived from it.
pub struct ViewCoordinator {
    model: SampleModel,
    editor: HistogramEditor,
    plotting_position: PlottingPosition,
    pairs: Vec<QuantilePair>,
    line: Option<ReferenceLine>,
    summary: SampleSummary,
    projections: u64,
}

impl ViewCoordinator {
    pub fn new(model: SampleModel, config: &AppConfig) -> Self {
        let editor = HistogramEditor::new(
            model.values(),
            config.bin_count,
            config.rounding,
            config.edge_closure,
        );
        let mut coordinator = Self {
            model,
            editor,
            plotting_position: config.plotting_position,
            pairs: Vec::new(),
            line: None,
            summary: SampleSummary::default(),
            projections: 0,
        };
        coordinator.reproject();
        coordinator
    }

    /// Handle one pointer event. Returns `true` if the sample was replaced.
    pub fn dispatch(&mut self, event: PointerEvent, target: &mut impl Redraw) -> bool {
        let Some(sample) = self.editor.handle(event) else {
            return false;
        };

        self.model.replace(sample);
        if self.model.is_empty() {
            info!("Every bar is at zero, the sample is now empty");
        }
        self.editor.rebin(self.model.values());
        self.reproject();

        target.redraw(View::Histogram);
        target.redraw(View::Probability);
        true
    }

    /// Handle a frame's worth of events in arrival order.
    pub fn dispatch_all(
        &mut self,
        events: impl IntoIterator<Item = PointerEvent>,
        target: &mut impl Redraw,
    ) -> usize {
        let mut edits = 0;
        for event in events {
            if self.dispatch(event, target) {
                edits += 1;
            }
        }
        if edits > 0 {
            debug!(
                "{} edits applied, sample has {} points",
                edits,
                self.model.len()
            );
        }
        edits
    }

    fn reproject(&mut self) {
        self.pairs = QuantileProjector::project(self.model.values(), self.plotting_position);
        self.line = QuantileProjector::fit_line(&self.pairs);
        self.summary = self.model.summary();
        self.projections += 1;
    }

    pub fn histogram(&self) -> &Histogram {
        self.editor.histogram()
    }

    pub fn editor(&self) -> &HistogramEditor {
        &self.editor
    }

    pub fn quantile_pairs(&self) -> &[QuantilePair] {
        &self.pairs
    }

    pub fn reference_line(&self) -> Option<ReferenceLine> {
        self.line
    }

    pub fn summary(&self) -> &SampleSummary {
        &self.summary
    }

    pub fn sample(&self) -> &[f64] {
        self.model.values()
    }

    /// Number of projector runs since construction, including the initial one.
    pub fn projections(&self) -> u64 {
        self.projections
    }
}

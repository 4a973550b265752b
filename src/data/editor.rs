//! Histogram Editor Module
//! Drag protocol for rewriting bar heights with the pointer.
//!
//! The editor keeps the bins currently on screen. A press over the plot
//! starts a drag and every move while dragging sets the bar under the
//! pointer to the pointer's height. Each such edit rebuilds the sample from
//! the bar heights; the caller swaps it into the model and calls
//! [`HistogramEditor::rebin`] so the next lookup sees bins derived from the
//! edited sample.

use crate::stats::{EdgeClosure, Histogram, RoundingPolicy};
use log::{debug, trace};

/// Editor drag state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Pointer position in plot data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Whether the pointer is over the plotting area of the histogram
    pub over_surface: bool,
}

impl PointerPosition {
    pub fn inside(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            over_surface: true,
        }
    }

    pub fn outside() -> Self {
        Self {
            x: None,
            y: None,
            over_surface: false,
        }
    }

    /// Both coordinates, if the pointer is over the plot and they are defined.
    fn coordinates(&self) -> Option<(f64, f64)> {
        if !self.over_surface {
            return None;
        }
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
            _ => None,
        }
    }
}

/// Pointer input delivered by the histogram view, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(PointerPosition),
    Move(PointerPosition),
    Release,
}

/// Maps pointer input onto bar edits and rebuilt samples.
#[derive(Debug, Clone)]
pub struct HistogramEditor {
    histogram: Histogram,
    state: DragState,
    bin_count: usize,
    rounding: RoundingPolicy,
}

impl HistogramEditor {
    pub fn new(
        sample: &[f64],
        bin_count: usize,
        rounding: RoundingPolicy,
        closure: EdgeClosure,
    ) -> Self {
        Self {
            histogram: Histogram::compute(sample, bin_count, closure),
            state: DragState::Idle,
            bin_count,
            rounding,
        }
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Advance the drag state machine.
    ///
    /// A press over the plot edits whether or not a drag is already under
    /// way, so a release and re-press inside one frame keeps the press.
    /// Returns the rebuilt sample when the event edited a bar, `None` when it
    /// was ignored or only changed state.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Vec<f64>> {
        match (self.state, event) {
            (_, PointerEvent::Press(position)) => {
                if !position.over_surface {
                    trace!("Press outside histogram ignored");
                    return None;
                }
                self.state = DragState::Dragging;
                let (x, y) = position.coordinates()?;
                self.edit_at(x, y)
            }
            (DragState::Dragging, PointerEvent::Move(position)) => {
                let Some((x, y)) = position.coordinates() else {
                    trace!("Move without plot coordinates ignored");
                    return None;
                };
                self.edit_at(x, y)
            }
            (DragState::Dragging, PointerEvent::Release) => {
                self.state = DragState::Idle;
                None
            }
            _ => None,
        }
    }

    /// Recompute bins from the sample now held by the model.
    pub fn rebin(&mut self, sample: &[f64]) {
        self.histogram = Histogram::compute(sample, self.bin_count, self.histogram.closure());
        trace!(
            "Rebinned: edges {:?}, counts {:?}",
            self.histogram.edges(),
            self.histogram.counts()
        );
    }

    /// Set the bar under `x` to height `y` and rebuild the sample.
    fn edit_at(&mut self, x: f64, y: f64) -> Option<Vec<f64>> {
        let Some(index) = self.histogram.locate(x) else {
            trace!("No bin at x = {x}");
            return None;
        };
        self.histogram.edit_height(index, y);

        let sample = self.histogram.resample(self.rounding);
        debug!(
            "Bin {}/{} set to {:.2}, sample now {} points",
            index,
            self.histogram.len(),
            self.histogram.bins()[index].height,
            sample.len()
        );
        Some(sample)
    }
}

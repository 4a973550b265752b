//! Histogram Bins Module
//! Equal-width binning of a sample, bin lookup by x coordinate, height edits
//! and reconstruction of a sample from bin heights.
//!
//! Bins are plain data. The view reads them to draw bars and the editor
//! writes pointer coordinates into them; nothing here knows about rendering.

use serde::Serialize;

/// How fractional bar heights are turned into point counts on resample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RoundingPolicy {
    /// 2.5 -> 3, 3.5 -> 4
    #[default]
    HalfUp,
    /// Banker's rounding: 2.5 -> 2, 3.5 -> 4
    HalfEven,
    /// 2.5 -> 3, -2.5 -> -3
    HalfAwayFromZero,
}

impl RoundingPolicy {
    pub fn round(self, value: f64) -> f64 {
        match self {
            RoundingPolicy::HalfUp => (value + 0.5).floor(),
            RoundingPolicy::HalfEven => value.round_ties_even(),
            RoundingPolicy::HalfAwayFromZero => value.round(),
        }
    }

    /// Number of points a bar of the given height stands for.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn count(self, height: f64) -> usize {
        let rounded = self.round(height);
        if rounded.is_finite() && rounded > 0.0 {
            rounded as usize
        } else {
            0
        }
    }
}

/// Whether the right edge of the last bin belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EdgeClosure {
    /// Every bin is `[left, right)` except the last, which is `[left, right]`
    /// so the sample maximum is counted.
    #[default]
    ClosedLast,
    /// Every bin, including the last, is `[left, right)`.
    HalfOpen,
}

/// A single histogram bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bin {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn midpoint(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// An ordered set of contiguous equal-width bins.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<Bin>,
    /// Right edge of the last bin, kept exact rather than `left + width`
    upper: f64,
    closure: EdgeClosure,
}

impl Histogram {
    /// A histogram with no bins. Every lookup misses.
    pub fn empty(closure: EdgeClosure) -> Self {
        Self {
            bins: Vec::new(),
            upper: 0.0,
            closure,
        }
    }

    /// Partition the range of `sample` into `bin_count` equal-width bins and
    /// count the values falling into each.
    ///
    /// An empty sample gives no bins. A sample whose values are all equal is
    /// binned over `[v - 0.5, v + 0.5]`.
    pub fn compute(sample: &[f64], bin_count: usize, closure: EdgeClosure) -> Self {
        Self::compute_in_range(sample, bin_count, None, closure)
    }

    /// Same as [`Histogram::compute`], with an optional explicit `(lo, hi)`
    /// range in place of the sample's min and max. Values outside the range
    /// are not counted. An inverted or non-finite range gives no bins.
    #[allow(clippy::cast_precision_loss)]
    pub fn compute_in_range(
        sample: &[f64],
        bin_count: usize,
        range: Option<(f64, f64)>,
        closure: EdgeClosure,
    ) -> Self {
        if bin_count == 0 {
            return Self::empty(closure);
        }

        let Some((mut lo, mut hi)) = range.or_else(|| finite_extent(sample)) else {
            return Self::empty(closure);
        };
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Self::empty(closure);
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bin_count as f64;
        let bins = (0..bin_count)
            .map(|i| Bin {
                left: lo + i as f64 * width,
                width,
                height: 0.0,
            })
            .collect();

        let mut histogram = Self {
            bins,
            upper: hi,
            closure,
        };

        for &value in sample {
            if let Some(idx) = histogram.locate(value) {
                histogram.bins[idx].height += 1.0;
            }
        }

        histogram
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn closure(&self) -> EdgeClosure {
        self.closure
    }

    /// All `len() + 1` bin edges, left to right.
    pub fn edges(&self) -> Vec<f64> {
        if self.bins.is_empty() {
            return Vec::new();
        }
        let mut edges: Vec<f64> = self.bins.iter().map(|b| b.left).collect();
        edges.push(self.upper);
        edges
    }

    /// Current bar heights, one per bin.
    pub fn counts(&self) -> Vec<f64> {
        self.bins.iter().map(|b| b.height).collect()
    }

    /// Index of the bin whose interval contains `x`.
    ///
    /// Interior boundaries belong to the bin on their right. The last bin's
    /// right edge is included only under [`EdgeClosure::ClosedLast`].
    pub fn locate(&self, x: f64) -> Option<usize> {
        if !x.is_finite() || self.bins.is_empty() {
            return None;
        }

        // Number of bins starting at or before x
        let idx = self.bins.partition_point(|b| b.left <= x).checked_sub(1)?;

        let last = self.bins.len() - 1;
        if idx < last {
            // x is below the next bin's left edge by construction
            return Some(idx);
        }

        let inside = match self.closure {
            EdgeClosure::ClosedLast => x <= self.upper,
            EdgeClosure::HalfOpen => x < self.upper,
        };
        inside.then_some(last)
    }

    /// Set one bar's height, clamping negative and NaN targets to zero.
    ///
    /// Returns `false` and leaves the histogram untouched if `index` is out
    /// of range.
    pub fn edit_height(&mut self, index: usize, new_height: f64) -> bool {
        let Some(bin) = self.bins.get_mut(index) else {
            return false;
        };
        // f64::max returns the non-NaN operand
        bin.height = new_height.max(0.0);
        true
    }

    /// Rebuild a sample from the bar heights: `round(height)` copies of each
    /// bin's midpoint, bins in order.
    ///
    /// Position information within a bin is lost; only counts survive.
    pub fn resample(&self, rounding: RoundingPolicy) -> Vec<f64> {
        let total: usize = self.bins.iter().map(|b| rounding.count(b.height)).sum();
        let mut sample = Vec::with_capacity(total);
        for bin in &self.bins {
            let count = rounding.count(bin.height);
            sample.extend(std::iter::repeat(bin.midpoint()).take(count));
        }
        sample
    }
}

/// Min and max of the finite values, `None` if there are none.
fn finite_extent(sample: &[f64]) -> Option<(f64, f64)> {
    sample
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

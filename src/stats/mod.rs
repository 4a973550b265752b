//! Statistics module - Binning, probability plots and summaries

mod calculator;
mod histogram;
mod probability;

pub use calculator::{SampleSummary, StatsCalculator};
pub use histogram::{Bin, EdgeClosure, Histogram, RoundingPolicy};
pub use probability::{PlottingPosition, QuantilePair, QuantileProjector, ReferenceLine};

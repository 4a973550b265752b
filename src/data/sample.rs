//! Sample Model Module
//! Owns the one-dimensional sample being edited.

use crate::stats::{EdgeClosure, Histogram, SampleSummary, StatsCalculator};
use statrs::distribution::{ContinuousCDF, Normal};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Invalid distribution parameters: {0}")]
    Distribution(String),
}

/// Holds the current sample. Replaced wholesale on every edit.
#[derive(Debug, Clone, Default)]
pub struct SampleModel {
    values: Vec<f64>,
}

impl SampleModel {
    /// Perfectly ranked sample of `n` points: the inverse CDF of
    /// `distribution` at `i / (n + 1)` for `i = 1..=n`.
    #[allow(clippy::cast_precision_loss)]
    pub fn initialize<D>(n: usize, distribution: &D) -> Self
    where
        D: ContinuousCDF<f64, f64>,
    {
        let denom = (n + 1) as f64;
        let values = (1..=n)
            .map(|i| distribution.inverse_cdf(i as f64 / denom))
            .collect();
        Self { values }
    }

    /// Standard normal sample of `n` points.
    pub fn standard_normal(n: usize) -> Result<Self, SampleError> {
        let normal =
            Normal::new(0.0, 1.0).map_err(|e| SampleError::Distribution(e.to_string()))?;
        Ok(Self::initialize(n, &normal))
    }

    /// Swap in a new sample.
    pub fn replace(&mut self, values: Vec<f64>) {
        self.values = values;
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bins of the current sample over its own range.
    pub fn histogram(&self, bin_count: usize, closure: EdgeClosure) -> Histogram {
        Histogram::compute(&self.values, bin_count, closure)
    }

    pub fn summary(&self) -> SampleSummary {
        StatsCalculator::summarize(&self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statrs::distribution::Uniform;

    #[test]
    fn test_standard_normal_is_ranked_and_symmetric() {
        let model = SampleModel::standard_normal(999).unwrap();
        let values = model.values();
        assert_eq!(values.len(), 999);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        // i = 500 is p = 0.5
        assert_relative_eq!(values[499], 0.0, epsilon = 1e-9);
        assert_relative_eq!(values[0], -values[998], epsilon = 1e-9);
    }

    #[test]
    fn test_initialize_is_deterministic() {
        let a = SampleModel::standard_normal(100).unwrap();
        let b = SampleModel::standard_normal(100).unwrap();
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn test_initialize_uses_given_distribution() {
        let uniform = Uniform::new(0.0, 10.0).unwrap();
        let model = SampleModel::initialize(4, &uniform);
        let expected = [2.0, 4.0, 6.0, 8.0];
        for (v, e) in model.values().iter().zip(expected) {
            assert_relative_eq!(*v, e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_points() {
        let model = SampleModel::standard_normal(0).unwrap();
        assert!(model.is_empty());
        assert!(model.histogram(10, EdgeClosure::ClosedLast).is_empty());
        assert_eq!(model.summary().count, 0);
    }

    #[test]
    fn test_replace_swaps_values() {
        let mut model = SampleModel::standard_normal(10).unwrap();
        model.replace(vec![1.5, 1.5, 2.5]);
        assert_eq!(model.len(), 3);
        assert_eq!(model.values(), &[1.5, 1.5, 2.5]);
        model.replace(Vec::new());
        assert!(model.is_empty());
    }

    #[test]
    fn test_histogram_counts_every_point() {
        let model = SampleModel::standard_normal(10_000).unwrap();
        let hist = model.histogram(100, EdgeClosure::ClosedLast);
        assert_eq!(hist.len(), 100);
        assert_eq!(hist.counts().iter().sum::<f64>(), 10_000.0);
    }
}

//! Normal Probability Plot Module
//! Pairs the order statistics of a sample with standard normal quantiles
//! and fits the reference line drawn through them.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

/// Formula mapping a 1-based rank `i` of `n` to a cumulative probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PlottingPosition {
    /// `(i - 0.5) / n`
    #[default]
    Hazen,
    /// Uniform order statistic medians, `(i - 0.3175) / (n + 0.365)` with
    /// exact end points `1 - 0.5^(1/n)` and `0.5^(1/n)`
    Filliben,
    /// `(i - 0.375) / (n + 0.25)`
    Blom,
    /// `i / (n + 1)`
    Weibull,
}

impl PlottingPosition {
    /// Probabilities for ranks `1..=n`, ascending and strictly inside (0, 1).
    #[allow(clippy::cast_precision_loss)]
    pub fn probabilities(self, n: usize) -> Vec<f64> {
        let nf = n as f64;
        let mut probs: Vec<f64> = (1..=n)
            .map(|i| {
                let i = i as f64;
                match self {
                    PlottingPosition::Hazen => (i - 0.5) / nf,
                    PlottingPosition::Filliben => (i - 0.3175) / (nf + 0.365),
                    PlottingPosition::Blom => (i - 0.375) / (nf + 0.25),
                    PlottingPosition::Weibull => i / (nf + 1.0),
                }
            })
            .collect();

        if self == PlottingPosition::Filliben && n > 0 {
            let upper = 0.5_f64.powf(1.0 / nf);
            probs[n - 1] = upper;
            probs[0] = 1.0 - upper;
        }

        probs
    }
}

/// One point of the probability plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantilePair {
    pub theoretical: f64,
    pub sample: f64,
}

/// Least-squares line of sample on theoretical quantiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLine {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation; NaN when the sample has no spread
    pub r: f64,
}

impl ReferenceLine {
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Builds normal QQ plot data from a sample.
pub struct QuantileProjector;

impl QuantileProjector {
    /// Sort the sample and pair each value with the standard normal quantile
    /// at its plotting position. An empty sample gives an empty plot.
    pub fn project(sample: &[f64], position: PlottingPosition) -> Vec<QuantilePair> {
        if sample.is_empty() {
            return Vec::new();
        }

        let mut sorted = sample.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let normal = Normal::standard();
        position
            .probabilities(sorted.len())
            .into_iter()
            .zip(sorted)
            .map(|(p, value)| QuantilePair {
                theoretical: normal.inverse_cdf(p),
                sample: value,
            })
            .collect()
    }

    /// Ordinary least-squares fit through the plot points.
    ///
    /// Returns `None` for fewer than two points or when the theoretical
    /// quantiles have no spread.
    #[allow(clippy::cast_precision_loss)]
    pub fn fit_line(pairs: &[QuantilePair]) -> Option<ReferenceLine> {
        if pairs.len() < 2 {
            return None;
        }

        let n = pairs.len() as f64;
        let mean_x = pairs.iter().map(|p| p.theoretical).sum::<f64>() / n;
        let mean_y = pairs.iter().map(|p| p.sample).sum::<f64>() / n;

        let (sxx, syy, sxy) = pairs.iter().fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), p| {
            let dx = p.theoretical - mean_x;
            let dy = p.sample - mean_y;
            (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
        });

        if sxx <= 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        let r = if syy > 0.0 {
            sxy / (sxx * syy).sqrt()
        } else {
            f64::NAN
        };

        Some(ReferenceLine {
            slope,
            intercept: mean_y - slope * mean_x,
            r,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_sample_projects_nothing() {
        assert!(QuantileProjector::project(&[], PlottingPosition::Hazen).is_empty());
        assert!(QuantileProjector::fit_line(&[]).is_none());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let sample = [3.0, -1.0, 2.5, 0.0, 2.5, 7.0];
        let first = QuantileProjector::project(&sample, PlottingPosition::Hazen);
        let second = QuantileProjector::project(&sample, PlottingPosition::Hazen);
        assert_eq!(first, second);
        assert_eq!(first.len(), sample.len());
    }

    #[test]
    fn test_projection_sorts_sample() {
        let pairs = QuantileProjector::project(&[3.0, 1.0, 2.0], PlottingPosition::Hazen);
        let values: Vec<f64> = pairs.iter().map(|p| p.sample).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sorted_input_keeps_order() {
        let sample: Vec<f64> = (0..50).map(|i| f64::from(i) * 0.5 - 3.0).collect();
        let pairs = QuantileProjector::project(&sample, PlottingPosition::Hazen);
        let values: Vec<f64> = pairs.iter().map(|p| p.sample).collect();
        assert_eq!(values, sample);
        assert!(pairs.windows(2).all(|w| w[0].theoretical < w[1].theoretical));
    }

    #[test]
    fn test_hazen_quantiles_are_symmetric() {
        let pairs = QuantileProjector::project(&[0.0, 1.0, 2.0, 3.0], PlottingPosition::Hazen);
        // (i - 0.5) / 4 -> 0.125, 0.375, 0.625, 0.875
        assert_relative_eq!(pairs[0].theoretical, -1.150_349_380_376_008, epsilon = 1e-9);
        assert_relative_eq!(pairs[1].theoretical, -0.318_639_363_964_375, epsilon = 1e-9);
        assert_relative_eq!(pairs[0].theoretical, -pairs[3].theoretical, epsilon = 1e-9);
        assert_relative_eq!(pairs[1].theoretical, -pairs[2].theoretical, epsilon = 1e-9);
    }

    #[test]
    fn test_single_value_sits_at_median() {
        for position in [
            PlottingPosition::Hazen,
            PlottingPosition::Filliben,
            PlottingPosition::Blom,
            PlottingPosition::Weibull,
        ] {
            let pairs = QuantileProjector::project(&[4.2], position);
            assert_eq!(pairs.len(), 1);
            assert_relative_eq!(pairs[0].theoretical, 0.0, epsilon = 1e-9);
            assert_eq!(pairs[0].sample, 4.2);
        }
    }

    #[test]
    fn test_filliben_end_points() {
        let probs = PlottingPosition::Filliben.probabilities(5);
        let upper = 0.5_f64.powf(0.2);
        assert_relative_eq!(probs[4], upper);
        assert_relative_eq!(probs[0], 1.0 - upper);
        assert_relative_eq!(probs[2], (3.0 - 0.3175) / 5.365);
    }

    #[test]
    fn test_probabilities_inside_unit_interval() {
        for position in [
            PlottingPosition::Hazen,
            PlottingPosition::Filliben,
            PlottingPosition::Blom,
            PlottingPosition::Weibull,
        ] {
            let probs = position.probabilities(1000);
            assert_eq!(probs.len(), 1000);
            assert!(probs.iter().all(|&p| p > 0.0 && p < 1.0));
            assert!(probs.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_fit_line_on_linear_sample() {
        let theoretical = PlottingPosition::Hazen.probabilities(20);
        let normal = Normal::standard();
        let sample: Vec<f64> = theoretical
            .iter()
            .map(|&p| 2.0 * normal.inverse_cdf(p) + 5.0)
            .collect();
        let pairs = QuantileProjector::project(&sample, PlottingPosition::Hazen);
        let line = QuantileProjector::fit_line(&pairs).unwrap();
        assert_relative_eq!(line.slope, 2.0, epsilon = 1e-9);
        assert_relative_eq!(line.intercept, 5.0, epsilon = 1e-9);
        assert_relative_eq!(line.r, 1.0, epsilon = 1e-9);
        assert_relative_eq!(line.at(1.0), 7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fit_line_on_constant_sample() {
        let pairs = QuantileProjector::project(&[1.5; 8], PlottingPosition::Hazen);
        let line = QuantileProjector::fit_line(&pairs).unwrap();
        assert_eq!(line.slope, 0.0);
        assert_eq!(line.intercept, 1.5);
        assert!(line.r.is_nan());
    }
}

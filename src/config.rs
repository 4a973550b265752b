//! Startup Configuration
//! Fixed constants the application is launched with. There is no runtime
//! reconfiguration surface; the values are validated once in `main`.

use crate::stats::{EdgeClosure, PlottingPosition, RoundingPolicy};
use serde::Serialize;
use thiserror::Error;

/// Number of points in the initial normal sample
pub const SAMPLE_SIZE: usize = 10_000;
/// Number of histogram bars
pub const BIN_COUNT: usize = 100;
pub const WINDOW_WIDTH: f32 = 1400.0;
pub const WINDOW_HEIGHT: f32 = 700.0;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Sample size must be at least 1")]
    EmptySample,
    #[error("Bin count must be at least 1")]
    NoBins,
    #[error("Window dimensions must be positive, got {0}x{1}")]
    InvalidWindow(f32, f32),
}

/// Application settings fixed at process start.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub sample_size: usize,
    pub bin_count: usize,
    pub window_width: f32,
    pub window_height: f32,
    pub rounding: RoundingPolicy,
    pub edge_closure: EdgeClosure,
    pub plotting_position: PlottingPosition,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sample_size: SAMPLE_SIZE,
            bin_count: BIN_COUNT,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            rounding: RoundingPolicy::default(),
            edge_closure: EdgeClosure::default(),
            plotting_position: PlottingPosition::default(),
        }
    }
}

impl AppConfig {
    /// Reject settings the editor cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size == 0 {
            return Err(ConfigError::EmptySample);
        }
        if self.bin_count == 0 {
            return Err(ConfigError::NoBins);
        }
        // Written as negated comparisons so NaN dimensions are rejected too
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::InvalidWindow(
                self.window_width,
                self.window_height,
            ));
        }
        Ok(())
    }

    /// One-line JSON rendering for the startup log.
    pub fn to_log_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.sample_size, 10_000);
        assert_eq!(config.bin_count, 100);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_bins_rejected() {
        let config = AppConfig {
            bin_count: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoBins));
    }

    #[test]
    fn test_zero_sample_rejected() {
        let config = AppConfig {
            sample_size: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptySample));
    }

    #[test]
    fn test_bad_window_rejected() {
        let config = AppConfig {
            window_height: 0.0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWindow(_, _))
        ));
    }

    #[test]
    fn test_log_line_names_policies() {
        let line = AppConfig::default().to_log_line().unwrap();
        assert!(line.contains("\"bin_count\":100"));
        assert!(line.contains("\"rounding\":\"HalfUp\""));
        assert!(line.contains("\"plotting_position\":\"Hazen\""));
    }
}

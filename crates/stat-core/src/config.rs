use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatError};

/// Rounding applied to the overview metric scalars.
///
/// The two historical revisions of the pipeline rounded these differently;
/// both behaviors survive as explicit choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MetricRounding {
    /// Round to the nearest whole number.
    Integer,
    /// Round to one decimal place.
    OneDecimal,
}

impl MetricRounding {
    /// Apply this rounding to a value.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            MetricRounding::Integer => value.round(),
            MetricRounding::OneDecimal => (value * 10.0).round() / 10.0,
        }
    }
}

/// Which timestamp anchors the day/night classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Classify by the hour of the event's temporal midpoint, falling back to
    /// the start when no end is known.
    Midpoint,
    /// Classify by the hour of the event's start.
    Start,
}

/// Tunable knobs of the normalization pipeline.
///
/// Collapses the two historical revisions (different night-window constants,
/// different rounding, with and without midpoint classification) into one
/// parameterized record instead of two parallel code paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Hour at which the night window opens (inclusive).
    pub night_start_hour: u32,
    /// Hour at which the night window closes (exclusive).
    pub night_end_hour: u32,
    /// `true` to anchor day/night classification on the event midpoint,
    /// `false` to use the start hour alone.
    pub use_midpoint_for_day_night: bool,
    /// Rounding for the overview metric scalars.
    pub metric_rounding: MetricRounding,
    /// Also exclude the first and last day of the filtered range when
    /// averaging the overview metrics.
    pub trim_metric_boundary_days: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            night_start_hour: 18,
            night_end_hour: 6,
            use_midpoint_for_day_night: true,
            metric_rounding: MetricRounding::Integer,
            trim_metric_boundary_days: false,
        }
    }
}

impl NormalizerConfig {
    /// Check that both window hours are valid hours of day.
    pub fn validate(&self) -> Result<()> {
        if self.night_start_hour > 23 {
            return Err(StatError::Config(format!(
                "night_start_hour must be 0-23, got {}",
                self.night_start_hour
            )));
        }
        if self.night_end_hour > 23 {
            return Err(StatError::Config(format!(
                "night_end_hour must be 0-23, got {}",
                self.night_end_hour
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── MetricRounding::apply ──────────────────────────────────────────────

    #[test]
    fn test_rounding_integer() {
        assert_eq!(MetricRounding::Integer.apply(13.46), 13.0);
        assert_eq!(MetricRounding::Integer.apply(13.5), 14.0);
    }

    #[test]
    fn test_rounding_one_decimal() {
        assert_eq!(MetricRounding::OneDecimal.apply(13.46), 13.5);
        assert_eq!(MetricRounding::OneDecimal.apply(13.44), 13.4);
    }

    // ── NormalizerConfig ───────────────────────────────────────────────────

    #[test]
    fn test_default_config_values() {
        let config = NormalizerConfig::default();
        assert_eq!(config.night_start_hour, 18);
        assert_eq!(config.night_end_hour, 6);
        assert!(config.use_midpoint_for_day_night);
        assert_eq!(config.metric_rounding, MetricRounding::Integer);
        assert!(!config.trim_metric_boundary_days);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(NormalizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_hours() {
        let config = NormalizerConfig {
            night_start_hour: 24,
            ..NormalizerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = NormalizerConfig {
            night_end_hour: 99,
            ..NormalizerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

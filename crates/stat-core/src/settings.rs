use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{Classification, MetricRounding, NormalizerConfig};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Daily and nightly statistics from a baby-care event log
#[derive(Parser, Debug, Clone)]
#[command(
    name = "baby-stat",
    about = "Daily and nightly statistics from a baby-care event log",
    version
)]
pub struct Settings {
    /// CSV export to analyze; the bundled example is used when omitted
    pub file: Option<PathBuf>,

    /// Only include events starting on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Hour at which the night window opens (0-23)
    #[arg(long, default_value = "18", value_parser = clap::value_parser!(u32).range(0..=23))]
    pub night_start_hour: u32,

    /// Hour at which the night window closes (0-23)
    #[arg(long, default_value = "6", value_parser = clap::value_parser!(u32).range(0..=23))]
    pub night_end_hour: u32,

    /// Timestamp anchoring the day/night classification
    #[arg(long, value_enum, default_value_t = Classification::Midpoint)]
    pub classify: Classification,

    /// Rounding applied to the overview metrics
    #[arg(long, value_enum, default_value_t = MetricRounding::Integer)]
    pub rounding: MetricRounding,

    /// Exclude the first and last day of the range from the overview metrics
    #[arg(long)]
    pub trim_metric_days: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Fold the CLI flags into the pipeline configuration record.
    pub fn normalizer_config(&self) -> NormalizerConfig {
        NormalizerConfig {
            night_start_hour: self.night_start_hour,
            night_end_hour: self.night_end_hour,
            use_midpoint_for_day_night: self.classify == Classification::Midpoint,
            metric_rounding: self.rounding,
            trim_metric_boundary_days: self.trim_metric_days,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        Settings::parse_from(std::iter::once("baby-stat").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_flag_values() {
        let settings = parse(&[]);
        assert!(settings.file.is_none());
        assert!(settings.start_date.is_none());
        assert_eq!(settings.night_start_hour, 18);
        assert_eq!(settings.night_end_hour, 6);
        assert_eq!(settings.classify, Classification::Midpoint);
        assert_eq!(settings.rounding, MetricRounding::Integer);
        assert!(!settings.trim_metric_days);
        assert_eq!(settings.log_level, "INFO");
    }

    #[test]
    fn test_positional_file_and_start_date() {
        let settings = parse(&["export.csv", "--start-date", "2015-10-01"]);
        assert_eq!(settings.file, Some(PathBuf::from("export.csv")));
        assert_eq!(
            settings.start_date,
            Some(NaiveDate::from_ymd_opt(2015, 10, 1).unwrap())
        );
    }

    #[test]
    fn test_variant_flags_flow_into_config() {
        let settings = parse(&[
            "--night-start-hour",
            "19",
            "--night-end-hour",
            "7",
            "--classify",
            "start",
            "--rounding",
            "one-decimal",
            "--trim-metric-days",
        ]);
        let config = settings.normalizer_config();
        assert_eq!(config.night_start_hour, 19);
        assert_eq!(config.night_end_hour, 7);
        assert!(!config.use_midpoint_for_day_night);
        assert_eq!(config.metric_rounding, MetricRounding::OneDecimal);
        assert!(config.trim_metric_boundary_days);
    }

    #[test]
    fn test_night_hours_out_of_range_rejected() {
        let result = Settings::try_parse_from(["baby-stat", "--night-start-hour", "24"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_start_date_rejected() {
        let result = Settings::try_parse_from(["baby-stat", "--start-date", "not-a-date"]);
        assert!(result.is_err());
    }
}

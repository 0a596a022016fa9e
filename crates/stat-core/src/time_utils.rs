use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::config::NormalizerConfig;
use crate::models::DayOrNight;

// ── Night window ──────────────────────────────────────────────────────────────

/// Whether `hour` falls inside the night window
/// `[night_start_hour, 24) ∪ [0, night_end_hour)`.
///
/// The window crosses midnight, so membership is the OR of the two ranges;
/// a naive `start <= hour < end` test would be empty.
pub fn is_night_hour(hour: u32, config: &NormalizerConfig) -> bool {
    hour >= config.night_start_hour || hour < config.night_end_hour
}

/// Classify an event as day or night under `config`.
///
/// With midpoint classification enabled the anchor is the hour of
/// `middle_point`; an event without a known end (and therefore without a
/// midpoint) is anchored on `start` instead. With midpoint classification
/// disabled the start hour is always used.
pub fn classify_day_or_night(
    start: NaiveDateTime,
    middle_point: Option<NaiveDateTime>,
    config: &NormalizerConfig,
) -> DayOrNight {
    let anchor = if config.use_midpoint_for_day_night {
        middle_point.unwrap_or(start)
    } else {
        start
    };

    if is_night_hour(anchor.hour(), config) {
        DayOrNight::Night
    } else {
        DayOrNight::Day
    }
}

/// The calendar date naming the sleep night an event belongs to.
///
/// An event starting at or after the window opening hour belongs to the night
/// of its own start date; an earlier start (the small hours of the morning)
/// belongs to the previous evening's night.
pub fn night_day(start: NaiveDateTime, config: &NormalizerConfig) -> NaiveDate {
    if start.hour() >= config.night_start_hour {
        start.date()
    } else {
        start.date() - Days::new(1)
    }
}

// ── Day boundaries ────────────────────────────────────────────────────────────

/// First instant of a calendar day, as a time of day.
pub fn day_start() -> NaiveTime {
    NaiveTime::MIN
}

/// Last whole second of a calendar day, as a time of day.
///
/// Midnight-crossing events are clipped here rather than at 24:00, which does
/// not exist as a `NaiveTime`.
pub fn day_end() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    // ── is_night_hour ──────────────────────────────────────────────────────

    #[test]
    fn test_night_window_boundary_hours() {
        let config = NormalizerConfig::default(); // 18..6

        // Opening hour is inside, closing hour is outside.
        assert!(is_night_hour(18, &config));
        assert!(!is_night_hour(6, &config));

        // Just before each boundary.
        assert!(!is_night_hour(17, &config));
        assert!(is_night_hour(5, &config));

        // Deep night on both sides of midnight.
        assert!(is_night_hour(23, &config));
        assert!(is_night_hour(0, &config));
        assert!(is_night_hour(3, &config));

        // Middle of the day.
        assert!(!is_night_hour(12, &config));
    }

    #[test]
    fn test_night_window_custom_hours() {
        let config = NormalizerConfig {
            night_start_hour: 20,
            night_end_hour: 7,
            ..NormalizerConfig::default()
        };
        assert!(is_night_hour(20, &config));
        assert!(!is_night_hour(19, &config));
        assert!(is_night_hour(6, &config));
        assert!(!is_night_hour(7, &config));
    }

    // ── classify_day_or_night ──────────────────────────────────────────────

    #[test]
    fn test_classify_midpoint_boundaries() {
        let config = NormalizerConfig::default();
        let start = dt(2015, 9, 8, 12, 0);

        // Midpoint exactly at the opening hour → Night.
        assert_eq!(
            classify_day_or_night(start, Some(dt(2015, 9, 8, 18, 0)), &config),
            DayOrNight::Night
        );
        // Midpoint exactly at the closing hour → Day.
        assert_eq!(
            classify_day_or_night(start, Some(dt(2015, 9, 9, 6, 0)), &config),
            DayOrNight::Day
        );
        // 17:59 → Day, 05:59 → Night.
        assert_eq!(
            classify_day_or_night(start, Some(dt(2015, 9, 8, 17, 59)), &config),
            DayOrNight::Day
        );
        assert_eq!(
            classify_day_or_night(start, Some(dt(2015, 9, 9, 5, 59)), &config),
            DayOrNight::Night
        );
    }

    #[test]
    fn test_classify_without_midpoint_falls_back_to_start() {
        let config = NormalizerConfig::default();
        assert_eq!(
            classify_day_or_night(dt(2015, 9, 8, 22, 0), None, &config),
            DayOrNight::Night
        );
        assert_eq!(
            classify_day_or_night(dt(2015, 9, 8, 10, 0), None, &config),
            DayOrNight::Day
        );
    }

    #[test]
    fn test_classify_start_anchor_ignores_midpoint() {
        let config = NormalizerConfig {
            use_midpoint_for_day_night: false,
            ..NormalizerConfig::default()
        };
        // Starts in the evening, midpoint well past the window close; the
        // start anchor keeps it Night.
        let start = dt(2015, 9, 8, 22, 0);
        let midpoint = Some(dt(2015, 9, 9, 9, 0));
        assert_eq!(
            classify_day_or_night(start, midpoint, &config),
            DayOrNight::Night
        );
    }

    // ── night_day ──────────────────────────────────────────────────────────

    #[test]
    fn test_night_day_evening_start_keeps_own_date() {
        let config = NormalizerConfig::default();
        let start = dt(2015, 9, 8, 19, 30);
        assert_eq!(
            night_day(start, &config),
            NaiveDate::from_ymd_opt(2015, 9, 8).unwrap()
        );
    }

    #[test]
    fn test_night_day_morning_start_belongs_to_previous_date() {
        let config = NormalizerConfig::default();
        let start = dt(2015, 9, 9, 2, 15);
        assert_eq!(
            night_day(start, &config),
            NaiveDate::from_ymd_opt(2015, 9, 8).unwrap()
        );
    }

    #[test]
    fn test_night_day_boundary_hour_is_inclusive() {
        let config = NormalizerConfig::default();
        let start = dt(2015, 9, 8, 18, 0);
        assert_eq!(
            night_day(start, &config),
            NaiveDate::from_ymd_opt(2015, 9, 8).unwrap()
        );
        // One minute earlier belongs to the night of the 7th.
        let start = dt(2015, 9, 8, 17, 59);
        assert_eq!(
            night_day(start, &config),
            NaiveDate::from_ymd_opt(2015, 9, 7).unwrap()
        );
    }

    #[test]
    fn test_night_day_crosses_month_boundary() {
        let config = NormalizerConfig::default();
        let start = dt(2015, 10, 1, 1, 0);
        assert_eq!(
            night_day(start, &config),
            NaiveDate::from_ymd_opt(2015, 9, 30).unwrap()
        );
    }

    // ── day boundaries ─────────────────────────────────────────────────────

    #[test]
    fn test_day_boundaries() {
        assert_eq!(day_start(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(day_end(), NaiveTime::from_hms_opt(23, 59, 59).unwrap());
    }
}

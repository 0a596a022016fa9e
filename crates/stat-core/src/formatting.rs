use chrono::Duration;

/// Microseconds per hour; durations are carried at microsecond resolution and
/// every human-facing figure divides by this to obtain hours.
pub const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Convert a time span to fractional hours.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use stat_core::formatting::duration_hours;
///
/// assert_eq!(duration_hours(Duration::hours(8)), 8.0);
/// assert_eq!(duration_hours(Duration::minutes(90)), 1.5);
/// assert_eq!(duration_hours(Duration::microseconds(28_800_000_000)), 8.0);
/// ```
pub fn duration_hours(duration: Duration) -> f64 {
    match duration.num_microseconds() {
        Some(us) => us as f64 / MICROS_PER_HOUR,
        // Spans beyond the i64 microsecond range lose sub-millisecond
        // precision, which is irrelevant at that magnitude.
        None => duration.num_milliseconds() as f64 / 3_600_000.0,
    }
}

/// Round `value` to `decimals` decimal places.
///
/// # Examples
///
/// ```
/// use stat_core::formatting::round_to;
///
/// assert_eq!(round_to(1.2345, 1), 1.2);
/// assert_eq!(round_to(1.2345, 2), 1.23);
/// assert_eq!(round_to(1.25, 1), 1.3);
/// assert_eq!(round_to(1.5, 0), 2.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format an optional figure with a fixed number of decimals, rendering a
/// dash placeholder for missing values.
///
/// # Examples
///
/// ```
/// use stat_core::formatting::format_opt;
///
/// assert_eq!(format_opt(Some(9.5), 2), "9.50");
/// assert_eq!(format_opt(None, 2), "-");
/// ```
pub fn format_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.prec$}", v, prec = decimals),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── duration_hours ─────────────────────────────────────────────────────

    #[test]
    fn test_duration_hours_eight_hour_span() {
        // 28,800,000,000 µs is exactly eight hours.
        let duration = Duration::microseconds(28_800_000_000);
        assert_eq!(duration_hours(duration), 8.0);
    }

    #[test]
    fn test_duration_hours_fractional() {
        assert_eq!(duration_hours(Duration::minutes(45)), 0.75);
    }

    #[test]
    fn test_duration_hours_negative_span_passes_through() {
        // Malformed input (end before start) is not validated anywhere; the
        // negative span simply flows into the figures.
        assert_eq!(duration_hours(Duration::hours(-2)), -2.0);
    }

    #[test]
    fn test_duration_hours_zero() {
        assert_eq!(duration_hours(Duration::zero()), 0.0);
    }

    // ── round_to ───────────────────────────────────────────────────────────

    #[test]
    fn test_round_to_one_decimal() {
        assert_eq!(round_to(9.449, 1), 9.4);
        assert_eq!(round_to(9.45, 1), 9.5);
    }

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(9.4949, 2), 9.49);
    }

    // ── format_opt ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_opt_present_and_missing() {
        assert_eq!(format_opt(Some(1.0), 1), "1.0");
        assert_eq!(format_opt(None, 1), "-");
    }
}

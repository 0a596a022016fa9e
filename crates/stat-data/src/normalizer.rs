//! Event normalization: derived temporal columns and boundary-day trimming.
//!
//! Turns parsed [`Event`]s into [`NormalizedEvent`]s carrying every derived
//! column the aggregation and timeline stages consume. The first and last
//! calendar day of the export are always dropped; an export window rarely
//! opens or closes exactly at midnight, so those days are partial captures
//! that would skew every per-day figure.

use stat_core::config::NormalizerConfig;
use stat_core::models::{Event, NormalizedEvent};
use stat_core::time_utils;
use tracing::debug;

/// Normalize `events` under `config`.
///
/// Rows whose start date is the minimum start date of the set, and rows whose
/// end date is the maximum end date, are trimmed; rows without an end date
/// survive the end-side trim. A log with two or fewer distinct days therefore
/// normalizes to an empty table.
pub fn normalize(events: &[Event], config: &NormalizerConfig) -> Vec<NormalizedEvent> {
    let rows: Vec<NormalizedEvent> = events
        .iter()
        .map(|event| derive_columns(event, config))
        .collect();

    let min_start = rows.iter().map(|r| r.start_date).min();
    let max_end = rows.iter().filter_map(|r| r.end_date).max();

    let total = rows.len();
    let kept: Vec<NormalizedEvent> = rows
        .into_iter()
        .filter(|r| Some(r.start_date) != min_start)
        .filter(|r| match r.end_date {
            Some(end_date) => Some(end_date) != max_end,
            None => true,
        })
        .collect();

    debug!(
        "Normalized {} events ({} boundary-day rows trimmed)",
        kept.len(),
        total - kept.len()
    );
    kept
}

/// Compute every derived column for one event.
fn derive_columns(event: &Event, config: &NormalizerConfig) -> NormalizedEvent {
    let duration = event.end.map(|end| end - event.start);
    let middle_point = duration.map(|d| event.start + d / 2);

    NormalizedEvent {
        event_type: event.event_type.clone(),
        start: event.start,
        end: event.end,
        start_date: event.start.date(),
        end_date: event.end.map(|end| end.date()),
        duration,
        start_time: event.start.time(),
        end_time: event.end.map(|end| end.time()),
        middle_point,
        day_or_night: time_utils::classify_day_or_night(event.start, middle_point, config),
        night_day: time_utils::night_day(event.start, config),
        start_condition: event.start_condition.clone(),
        start_location: event.start_location.clone(),
        end_condition: event.end_condition.clone(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! The interval splitter: normalized events → per-day timeline segments.
//!
//! Timeline (Gantt) charts plot every day on a shared time-of-day axis, so an
//! event crossing midnight cannot be drawn as one bar. The splitter clips such
//! an event at the day boundary and emits one bounded segment per touched
//! calendar day.

use std::collections::HashSet;

use chrono::NaiveDate;
use stat_core::models::{EventType, GanttSegment, NormalizedEvent};
use stat_core::time_utils::{day_end, day_start};

/// Split the events of one category into timeline segments.
///
/// * An event contained in a single calendar day yields one segment with its
///   own start and end times.
/// * An event whose end date differs from its start date yields two segments:
///   the portion before midnight, clipped at [`day_end`] and owned by the
///   start date, and the portion after midnight, opening at [`day_start`] and
///   owned by the end date.
/// * An event without a known end has no bounded interval to draw and yields
///   nothing.
///
/// Events spanning three or more calendar days still yield only the start-day
/// and end-day segments; any full intermediate day is absent from the output.
pub fn build_segments(events: &[NormalizedEvent], event_type: &EventType) -> Vec<GanttSegment> {
    let mut segments = Vec::new();

    for event in events.iter().filter(|e| &e.event_type == event_type) {
        let (Some(end_date), Some(end_time)) = (event.end_date, event.end_time) else {
            continue;
        };

        if end_date == event.start_date {
            segments.push(GanttSegment {
                event_type: event.event_type.clone(),
                start_time: event.start_time,
                end_time,
                date: event.start_date,
            });
        } else {
            segments.push(GanttSegment {
                event_type: event.event_type.clone(),
                start_time: event.start_time,
                end_time: day_end(),
                date: event.start_date,
            });
            segments.push(GanttSegment {
                event_type: event.event_type.clone(),
                start_time: day_start(),
                end_time,
                date: end_date,
            });
        }
    }

    segments
}

/// Keep only the segments owned by one of `dates`.
///
/// Drives the best/worst-night timelines: the full sleep timeline joined
/// against a ranked date set.
pub fn filter_by_dates(segments: &[GanttSegment], dates: &HashSet<NaiveDate>) -> Vec<GanttSegment> {
    segments
        .iter()
        .filter(|segment| dates.contains(&segment.date))
        .cloned()
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::formatting::duration_hours;

/// Category of a logged event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// A sleep interval (night sleep or daytime nap).
    Sleep,
    /// A feeding interval.
    Feed,
    /// A growth measurement row; carries its values in the condition fields.
    Growth,
    /// Any other category found in the export, kept verbatim.
    Other(String),
}

impl EventType {
    /// Map the raw `Type` column value to a category.
    ///
    /// Unrecognised values are preserved as [`EventType::Other`] rather than
    /// rejected; the export format grows new categories over time.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "Sleep" => EventType::Sleep,
            "Feed" => EventType::Feed,
            "Growth" => EventType::Growth,
            other => EventType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Sleep => write!(f, "Sleep"),
            EventType::Feed => write!(f, "Feed"),
            EventType::Growth => write!(f, "Growth"),
            EventType::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Whether an event belongs to the day or to the night window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOrNight {
    Day,
    Night,
}

impl std::fmt::Display for DayOrNight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayOrNight::Day => write!(f, "Day"),
            DayOrNight::Night => write!(f, "Night"),
        }
    }
}

/// A single raw row of the event log, after timestamp parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Event category from the `Type` column.
    pub event_type: EventType,
    /// When the event started (local wall-clock time, no zone).
    pub start: NaiveDateTime,
    /// When the event ended; `None` for in-progress or instant events.
    pub end: Option<NaiveDateTime>,
    /// Free-text `Start Condition` column; weight (`"<kg>"`) on Growth rows.
    pub start_condition: Option<String>,
    /// Free-text `Start Location` column; height (`"<cm>"`) on Growth rows.
    pub start_location: Option<String>,
    /// Free-text `End Condition` column; head circumference on Growth rows.
    pub end_condition: Option<String>,
}

/// An [`Event`] with all derived temporal columns attached.
#[derive(Debug, Clone)]
pub struct NormalizedEvent {
    pub event_type: EventType,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    /// Calendar day the event started on.
    pub start_date: NaiveDate,
    /// Calendar day the event ended on, when an end is known.
    pub end_date: Option<NaiveDate>,
    /// `end − start`; `None` when no end is known. Not validated: a log with
    /// `end < start` propagates as a negative span.
    pub duration: Option<Duration>,
    /// Time-of-day component of `start`, for same-axis timeline comparison.
    pub start_time: NaiveTime,
    /// Time-of-day component of `end`.
    pub end_time: Option<NaiveTime>,
    /// `start + duration/2`; anchors day/night ownership of events that span
    /// the window boundary.
    pub middle_point: Option<NaiveDateTime>,
    /// Day/night label under the active night window.
    pub day_or_night: DayOrNight,
    /// Calendar date of the sleep night this event belongs to.
    pub night_day: NaiveDate,
    pub start_condition: Option<String>,
    pub start_location: Option<String>,
    pub end_condition: Option<String>,
}

impl NormalizedEvent {
    /// Duration in fractional hours, when a duration is known.
    pub fn duration_hours(&self) -> Option<f64> {
        self.duration.map(duration_hours)
    }
}

/// One bar of the timeline (Gantt) table.
///
/// Built fresh from the current filtered event set on every request; an event
/// crossing midnight contributes two segments, one per touched calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttSegment {
    pub event_type: EventType,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// The calendar day that owns this segment.
    pub date: NaiveDate,
}

/// One row of the best/worst night ranking.
#[derive(Debug, Clone)]
pub struct RankedNight {
    /// The night-day grouping key, renamed to a plain date for consumers.
    pub date: NaiveDate,
    /// Mean sleep duration across the night's events; `None` when the night
    /// has no event with a known duration.
    pub mean_duration: Option<Duration>,
}

impl RankedNight {
    /// Mean duration in fractional hours.
    pub fn mean_hours(&self) -> Option<f64> {
        self.mean_duration.map(duration_hours)
    }
}

/// Per-day daytime sleep summary, paired with its ranked night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySleepSummary {
    pub date: NaiveDate,
    /// Total daytime sleep, hours, rounded to 1 decimal.
    pub day_sleep_hours: f64,
    /// Number of daytime naps (rows, including those without a duration).
    pub day_naps: usize,
    /// Mean nap length, hours, rounded to 1 decimal; `None` without durations.
    pub hours_per_nap: Option<f64>,
    /// Mean sleep duration of the paired night, hours, rounded to 2 decimals.
    pub night_mean_hours: Option<f64>,
}

/// The four headline scalars shown for the selected period.
///
/// Every field is `None` when the underlying table is empty, so callers can
/// render a placeholder instead of failing on an empty load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    /// Mean total sleep hours per day.
    pub sleep_hours_per_day: Option<f64>,
    /// Mean number of sleep events per day.
    pub sleeps_per_day: Option<f64>,
    /// Mean share of sleep hours falling in the night window, as a percentage.
    pub night_sleep_percent: Option<f64>,
    /// Mean number of feeds per day.
    pub feeds_per_day: Option<f64>,
}

/// Per-day sleep series backing the overview metrics and time-series charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySleep {
    pub date: NaiveDate,
    /// Total sleep hours on this day (day and night events combined).
    pub total_hours: f64,
    /// Number of sleep events started on this day.
    pub sleeps: usize,
    /// `night hours / total hours` for this day; `None` when no event on the
    /// day has a known duration.
    pub night_share: Option<f64>,
}

/// Growth measurements extracted from one Growth row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRecord {
    pub date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub head_circumference_cm: Option<f64>,
}

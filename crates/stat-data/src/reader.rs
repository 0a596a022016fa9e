//! CSV loading for Baby Stat.
//!
//! Reads event rows exported by a tracking app (CSV, UTF-8, header row) and
//! converts them into typed [`Event`]s for downstream processing. Loading is
//! fail-fast: a malformed timestamp or a missing required column aborts the
//! whole load, and no partial dataset is produced.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use stat_core::error::{Result, StatError};
use stat_core::models::{Event, EventType};
use tracing::debug;

/// The fixed timestamp format of the `Start` and `End` columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Columns that must be present in the header row.
const REQUIRED_COLUMNS: &[&str] = &["Type", "Start", "End"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and parse an event CSV file from disk.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let file = std::fs::File::open(path).map_err(|source| StatError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let events = read_events(file)?;
    debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Parse events from any readable byte source.
///
/// Rows are returned sorted by start timestamp. An empty `End` cell marks an
/// in-progress or instant event and maps to `None`; any non-empty timestamp
/// that does not match [`DATE_FORMAT`] fails the whole load.
pub fn read_events<R: Read>(source: R) -> Result<Vec<Event>> {
    let mut csv_reader = csv::Reader::from_reader(source);
    validate_headers(&mut csv_reader)?;

    let mut events = Vec::new();
    for (index, record) in csv_reader.deserialize::<RawRecord>().enumerate() {
        // The header occupies line 1; the first data row is line 2.
        let line = index + 2;
        let record = record?;
        events.push(map_record(record, line)?);
    }

    events.sort_by_key(|e| e.start);
    Ok(events)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// One row of the export, exactly as serialized.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Type")]
    event_type: String,
    #[serde(rename = "Start")]
    start: String,
    #[serde(rename = "End")]
    end: Option<String>,
    #[serde(rename = "Start Condition")]
    start_condition: Option<String>,
    #[serde(rename = "Start Location")]
    start_location: Option<String>,
    #[serde(rename = "End Condition")]
    end_condition: Option<String>,
}

/// Fail with [`StatError::MissingColumn`] when a required column is absent.
fn validate_headers<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<()> {
    let headers = csv_reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *required) {
            return Err(StatError::MissingColumn((*required).to_string()));
        }
    }
    Ok(())
}

/// Convert a raw row into a typed [`Event`].
fn map_record(record: RawRecord, line: usize) -> Result<Event> {
    let start = parse_timestamp(&record.start, line)?;
    let end = match record.end.as_deref() {
        Some(value) if !value.trim().is_empty() => Some(parse_timestamp(value, line)?),
        _ => None,
    };

    Ok(Event {
        event_type: EventType::from_raw(&record.event_type),
        start,
        end,
        start_condition: record.start_condition,
        start_location: record.start_location,
        end_condition: record.end_condition,
    })
}

/// Parse one timestamp cell against [`DATE_FORMAT`].
fn parse_timestamp(value: &str, line: usize) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        StatError::TimestampParse {
            value: value.to_string(),
            row: line,
        }
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Top-level analysis pipeline for Baby Stat.
//!
//! Orchestrates loading, normalization, the date filter, timeline splitting
//! and aggregation, returning an [`AnalysisResult`] ready for the display
//! layer. The pipeline is synchronous and runs to completion once per load
//! or filter change; there is no partial or incremental recomputation.

use std::collections::HashSet;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use stat_core::config::NormalizerConfig;
use stat_core::error::Result;
use stat_core::models::{
    DailySleep, DaySleepSummary, Event, EventType, GanttSegment, GrowthRecord, NormalizedEvent,
    OverviewMetrics, RankedNight,
};
use tracing::info;

use crate::aggregator::EventAggregator;
use crate::{normalizer, reader, timeline};

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of raw rows read from the source.
    pub rows_loaded: usize,
    /// Rows remaining after normalization and boundary-day trimming.
    pub rows_normalized: usize,
    /// Rows remaining after the start-date filter.
    pub rows_analyzed: usize,
    /// Wall-clock seconds spent loading the source file.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent in normalization and aggregation.
    pub transform_time_seconds: f64,
}

/// The complete output of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// The normalized, filtered event table every other table derives from.
    pub events: Vec<NormalizedEvent>,
    /// Growth measurements in start order.
    pub growth: Vec<GrowthRecord>,
    /// Per-day timeline segments for the sleep events.
    pub sleep_timeline: Vec<GanttSegment>,
    /// Top nights by mean sleep duration, longest first.
    pub best_nights: Vec<RankedNight>,
    /// Top nights by mean sleep duration, shortest first.
    pub worst_nights: Vec<RankedNight>,
    /// Daytime summaries paired with the best nights.
    pub best_night_days: Vec<DaySleepSummary>,
    /// Daytime summaries paired with the worst nights.
    pub worst_night_days: Vec<DaySleepSummary>,
    /// Sleep timeline restricted to the best-night dates.
    pub best_night_timeline: Vec<GanttSegment>,
    /// Sleep timeline restricted to the worst-night dates.
    pub worst_night_timeline: Vec<GanttSegment>,
    /// Per-day sleep series for time-series charts.
    pub daily_sleep: Vec<DailySleep>,
    /// The four headline scalars.
    pub overview: OverviewMetrics,
    /// Metadata about this analysis run.
    pub metadata: AnalysisMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline against a CSV file on disk.
///
/// Loading is fail-fast: any malformed row aborts the whole run and no result
/// is produced.
pub fn analyze_file(
    path: &Path,
    start_date: Option<NaiveDate>,
    config: &NormalizerConfig,
) -> Result<AnalysisResult> {
    let load_start = std::time::Instant::now();
    let events = reader::load_events(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    Ok(analyze_with_load_time(events, start_date, config, load_time))
}

/// Run the pipeline against already-parsed events.
///
/// Infallible: every downstream stage tolerates an empty table.
pub fn analyze_events(
    events: Vec<Event>,
    start_date: Option<NaiveDate>,
    config: &NormalizerConfig,
) -> AnalysisResult {
    analyze_with_load_time(events, start_date, config, 0.0)
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

fn analyze_with_load_time(
    events: Vec<Event>,
    start_date: Option<NaiveDate>,
    config: &NormalizerConfig,
    load_time: f64,
) -> AnalysisResult {
    let transform_start = std::time::Instant::now();
    let rows_loaded = events.len();

    // ── Step 1: Normalize ─────────────────────────────────────────────────────
    let normalized = normalizer::normalize(&events, config);
    let rows_normalized = normalized.len();

    // ── Step 2: Start-date filter ─────────────────────────────────────────────
    let filtered: Vec<NormalizedEvent> = match start_date {
        Some(lower) => normalized
            .into_iter()
            .filter(|e| e.start_date >= lower)
            .collect(),
        None => normalized,
    };

    // ── Step 3: Derived tables ────────────────────────────────────────────────
    let growth = EventAggregator::growth_table(&filtered);
    let sleep_timeline = timeline::build_segments(&filtered, &EventType::Sleep);

    let best_nights = EventAggregator::best_nights(&filtered);
    let worst_nights = EventAggregator::worst_nights(&filtered);
    let best_night_days = EventAggregator::day_sleep_summary(&filtered, &best_nights);
    let worst_night_days = EventAggregator::day_sleep_summary(&filtered, &worst_nights);

    let best_dates: HashSet<NaiveDate> = best_nights.iter().map(|n| n.date).collect();
    let worst_dates: HashSet<NaiveDate> = worst_nights.iter().map(|n| n.date).collect();
    let best_night_timeline = timeline::filter_by_dates(&sleep_timeline, &best_dates);
    let worst_night_timeline = timeline::filter_by_dates(&sleep_timeline, &worst_dates);

    let daily_sleep = EventAggregator::daily_sleep(&filtered);
    let overview = EventAggregator::overview(&filtered, config);

    let transform_time = transform_start.elapsed().as_secs_f64();

    info!(
        rows_loaded,
        rows_normalized,
        rows_analyzed = filtered.len(),
        "analysis complete"
    );

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        rows_loaded,
        rows_normalized,
        rows_analyzed: filtered.len(),
        load_time_seconds: load_time,
        transform_time_seconds: transform_time,
    };

    AnalysisResult {
        events: filtered,
        growth,
        sleep_timeline,
        best_nights,
        worst_nights,
        best_night_days,
        worst_night_days,
        best_night_timeline,
        worst_night_timeline,
        daily_sleep,
        overview,
        metadata,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Grouped statistics over normalized events.
//!
//! Produces the ranked best/worst night tables, the paired per-day daytime
//! sleep summaries, the daily time series and the overview scalars. Every
//! function tolerates an empty input, returning empty tables or `None`
//! scalars rather than failing.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate};
use stat_core::config::NormalizerConfig;
use stat_core::formatting::{duration_hours, round_to};
use stat_core::growth::{parse_length, parse_weight};
use stat_core::models::{
    DailySleep, DayOrNight, DaySleepSummary, EventType, GrowthRecord, NormalizedEvent,
    OverviewMetrics, RankedNight,
};

/// How many nights the best/worst rankings keep.
pub const RANKING_SIZE: usize = 10;

/// Stateless helper that groups normalized events into statistic tables.
pub struct EventAggregator;

impl EventAggregator {
    // ── Night rankings ────────────────────────────────────────────────────────

    /// Top nights by mean sleep duration, longest first.
    pub fn best_nights(events: &[NormalizedEvent]) -> Vec<RankedNight> {
        Self::ranked_nights(events, true)
    }

    /// Top nights by mean sleep duration, shortest first.
    pub fn worst_nights(events: &[NormalizedEvent]) -> Vec<RankedNight> {
        Self::ranked_nights(events, false)
    }

    /// Group night-time sleep events by their night-day and rank the groups
    /// by mean duration, keeping the top [`RANKING_SIZE`].
    fn ranked_nights(events: &[NormalizedEvent], longest_first: bool) -> Vec<RankedNight> {
        let mut groups: BTreeMap<NaiveDate, Vec<Duration>> = BTreeMap::new();
        for event in events
            .iter()
            .filter(|e| e.event_type == EventType::Sleep && e.day_or_night == DayOrNight::Night)
        {
            let durations = groups.entry(event.night_day).or_default();
            if let Some(duration) = event.duration {
                durations.push(duration);
            }
        }

        let mut ranked: Vec<RankedNight> = groups
            .into_iter()
            .map(|(date, durations)| RankedNight {
                date,
                mean_duration: mean_duration(&durations),
            })
            .collect();

        // Stable sort keeps equal means in date order; a night without any
        // known duration sorts last in both directions.
        ranked.sort_by(|a, b| match (a.mean_duration, b.mean_duration) {
            (Some(x), Some(y)) => {
                if longest_first {
                    y.cmp(&x)
                } else {
                    x.cmp(&y)
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        ranked.truncate(RANKING_SIZE);
        ranked
    }

    // ── Paired day summaries ──────────────────────────────────────────────────

    /// Per-day daytime sleep summary, inner-joined against a ranked night
    /// table on the date.
    ///
    /// Only days that appear in `nights` survive the join; the paired night's
    /// mean duration is attached in hours rounded to two decimals. Rows come
    /// back sorted by date ascending.
    pub fn day_sleep_summary(
        events: &[NormalizedEvent],
        nights: &[RankedNight],
    ) -> Vec<DaySleepSummary> {
        let night_means: HashMap<NaiveDate, Option<Duration>> =
            nights.iter().map(|n| (n.date, n.mean_duration)).collect();

        let mut groups: BTreeMap<NaiveDate, (Vec<Duration>, usize)> = BTreeMap::new();
        for event in events
            .iter()
            .filter(|e| e.event_type == EventType::Sleep && e.day_or_night == DayOrNight::Day)
        {
            let (durations, rows) = groups.entry(event.start_date).or_default();
            *rows += 1;
            if let Some(duration) = event.duration {
                durations.push(duration);
            }
        }

        groups
            .into_iter()
            .filter_map(|(date, (durations, rows))| {
                let night = night_means.get(&date)?;
                let total: f64 = durations.iter().map(|d| duration_hours(*d)).sum();
                Some(DaySleepSummary {
                    date,
                    day_sleep_hours: round_to(total, 1),
                    day_naps: rows,
                    hours_per_nap: mean_duration(&durations)
                        .map(|d| round_to(duration_hours(d), 1)),
                    night_mean_hours: night.map(|d| round_to(duration_hours(d), 2)),
                })
            })
            .collect()
    }

    // ── Daily series ──────────────────────────────────────────────────────────

    /// Per-day sleep totals, event counts and night share, date ascending.
    pub fn daily_sleep(events: &[NormalizedEvent]) -> Vec<DailySleep> {
        #[derive(Default)]
        struct DayAccumulator {
            total_hours: f64,
            night_hours: f64,
            rows: usize,
            has_duration: bool,
        }

        let mut groups: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
        for event in events.iter().filter(|e| e.event_type == EventType::Sleep) {
            let day = groups.entry(event.start_date).or_default();
            day.rows += 1;
            if let Some(duration) = event.duration {
                let hours = duration_hours(duration);
                day.total_hours += hours;
                if event.day_or_night == DayOrNight::Night {
                    day.night_hours += hours;
                }
                day.has_duration = true;
            }
        }

        groups
            .into_iter()
            .map(|(date, day)| DailySleep {
                date,
                total_hours: day.total_hours,
                sleeps: day.rows,
                night_share: if day.has_duration && day.total_hours != 0.0 {
                    Some(day.night_hours / day.total_hours)
                } else {
                    None
                },
            })
            .collect()
    }

    /// Number of feed events per day, date ascending.
    pub fn feeds_per_day(events: &[NormalizedEvent]) -> Vec<(NaiveDate, usize)> {
        let mut groups: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for event in events.iter().filter(|e| e.event_type == EventType::Feed) {
            *groups.entry(event.start_date).or_default() += 1;
        }
        groups.into_iter().collect()
    }

    // ── Overview ──────────────────────────────────────────────────────────────

    /// The four headline scalars for the current event set.
    pub fn overview(events: &[NormalizedEvent], config: &NormalizerConfig) -> OverviewMetrics {
        let mut sleep_days = Self::daily_sleep(events);
        let mut feed_days = Self::feeds_per_day(events);

        if config.trim_metric_boundary_days {
            let min = events.iter().map(|e| e.start_date).min();
            let max = events.iter().map(|e| e.start_date).max();
            if let (Some(min), Some(max)) = (min, max) {
                sleep_days.retain(|d| d.date != min && d.date != max);
                feed_days.retain(|(date, _)| *date != min && *date != max);
            }
        }

        let rounding = config.metric_rounding;
        OverviewMetrics {
            sleep_hours_per_day: mean(sleep_days.iter().map(|d| d.total_hours))
                .map(|v| rounding.apply(v)),
            sleeps_per_day: mean(sleep_days.iter().map(|d| d.sleeps as f64))
                .map(|v| rounding.apply(v)),
            night_sleep_percent: mean(sleep_days.iter().filter_map(|d| d.night_share))
                .map(|v| rounding.apply(v * 100.0)),
            feeds_per_day: mean(feed_days.iter().map(|(_, count)| *count as f64))
                .map(|v| rounding.apply(v)),
        }
    }

    // ── Growth ────────────────────────────────────────────────────────────────

    /// Growth measurements extracted from the Growth rows, in start order.
    ///
    /// A missing or malformed measurement becomes `None`; the row is kept.
    pub fn growth_table(events: &[NormalizedEvent]) -> Vec<GrowthRecord> {
        events
            .iter()
            .filter(|e| e.event_type == EventType::Growth)
            .map(|e| GrowthRecord {
                date: e.start_date,
                weight_kg: e.start_condition.as_deref().and_then(parse_weight),
                height_cm: e.start_location.as_deref().and_then(parse_length),
                head_circumference_cm: e.end_condition.as_deref().and_then(parse_length),
            })
            .collect()
    }
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// Mean of a duration set, `None` when empty.
fn mean_duration(durations: &[Duration]) -> Option<Duration> {
    if durations.is_empty() {
        return None;
    }
    let total: i64 = durations.iter().filter_map(|d| d.num_microseconds()).sum();
    Some(Duration::microseconds(total / durations.len() as i64))
}

/// Arithmetic mean of an f64 stream, `None` when empty.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Plain-text report rendering.
//!
//! The thin display binding over the analysis output: formats the overview
//! scalars, the ranked night tables with their paired day summaries, the
//! ranked-night timelines and the growth table. Carries no computation of its
//! own.

use stat_core::formatting::format_opt;
use stat_core::models::{DaySleepSummary, GanttSegment, GrowthRecord, RankedNight};
use stat_data::analysis::AnalysisResult;

/// Render the whole report.
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();

    render_overview(&mut out, result);
    render_ranking(
        &mut out,
        "Best nights (top 10 by mean night sleep)",
        &result.best_nights,
        &result.best_night_days,
        &result.best_night_timeline,
    );
    render_ranking(
        &mut out,
        "Worst nights (top 10 by mean night sleep)",
        &result.worst_nights,
        &result.worst_night_days,
        &result.worst_night_timeline,
    );
    render_growth(&mut out, &result.growth);

    out
}

// ── Sections ──────────────────────────────────────────────────────────────────

fn render_overview(out: &mut String, result: &AnalysisResult) {
    out.push_str("Overview for selected period\n");
    out.push_str(&format!(
        "  Sleep hours per day : {}\n",
        scalar(result.overview.sleep_hours_per_day)
    ));
    out.push_str(&format!(
        "  Sleeps per day      : {}\n",
        scalar(result.overview.sleeps_per_day)
    ));
    out.push_str(&format!(
        "  Night sleep         : {} %\n",
        scalar(result.overview.night_sleep_percent)
    ));
    out.push_str(&format!(
        "  Feeds per day       : {}\n",
        scalar(result.overview.feeds_per_day)
    ));
    out.push('\n');
}

fn render_ranking(
    out: &mut String,
    title: &str,
    nights: &[RankedNight],
    days: &[DaySleepSummary],
    timeline: &[GanttSegment],
) {
    out.push_str(title);
    out.push('\n');

    if nights.is_empty() {
        out.push_str("  (no qualifying nights)\n\n");
        return;
    }

    out.push_str("  Date         Night sleep (h)\n");
    for night in nights {
        out.push_str(&format!(
            "  {}   {}\n",
            night.date,
            format_opt(night.mean_hours(), 2)
        ));
    }

    if !days.is_empty() {
        out.push_str("\n  Date         Day sleep (h)  Naps  Hours/nap  Night mean (h)\n");
        for day in days {
            out.push_str(&format!(
                "  {}   {:>13}  {:>4}  {:>9}  {:>14}\n",
                day.date,
                format!("{:.1}", day.day_sleep_hours),
                day.day_naps,
                format_opt(day.hours_per_nap, 1),
                format_opt(day.night_mean_hours, 2),
            ));
        }
    }

    if !timeline.is_empty() {
        out.push_str("\n  Timeline\n");
        for segment in timeline {
            out.push_str(&format!(
                "  {}   {} - {}\n",
                segment.date, segment.start_time, segment.end_time
            ));
        }
    }

    out.push('\n');
}

fn render_growth(out: &mut String, growth: &[GrowthRecord]) {
    out.push_str("Growth\n");
    if growth.is_empty() {
        out.push_str("  (no measurements)\n");
        return;
    }

    out.push_str("  Date         Weight (kg)  Height (cm)  Head (cm)\n");
    for record in growth {
        out.push_str(&format!(
            "  {}   {:>11}  {:>11}  {:>9}\n",
            record.date,
            format_opt(record.weight_kg, 1),
            format_opt(record.height_cm, 1),
            format_opt(record.head_circumference_cm, 1),
        ));
    }
}

/// Display an overview scalar without forcing decimals onto whole numbers.
fn scalar(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "-".to_string(),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use stat_core::config::NormalizerConfig;
    use stat_core::models::{Event, EventType};
    use stat_data::analysis::analyze_events;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn event(event_type: EventType, start: &str, end: Option<&str>) -> Event {
        Event {
            event_type,
            start: dt(start),
            end: end.map(dt),
            start_condition: None,
            start_location: None,
            end_condition: None,
        }
    }

    fn sample_result() -> stat_data::analysis::AnalysisResult {
        let events = vec![
            // Boundary padding: trimmed away by the normalizer.
            event(EventType::Sleep, "2015-08-31 10:00", Some("2015-08-31 11:00")),
            event(EventType::Sleep, "2015-09-01 22:00", Some("2015-09-02 06:00")),
            event(EventType::Sleep, "2015-09-02 13:00", Some("2015-09-02 14:30")),
            event(EventType::Sleep, "2015-09-02 22:00", Some("2015-09-03 06:00")),
            event(EventType::Sleep, "2015-09-03 22:00", Some("2015-09-04 06:00")),
        ];
        analyze_events(events, None, &NormalizerConfig::default())
    }

    #[test]
    fn test_render_contains_all_sections() {
        let report = render(&sample_result());

        assert!(report.contains("Overview for selected period"));
        assert!(report.contains("Best nights"));
        assert!(report.contains("Worst nights"));
        assert!(report.contains("Growth"));
    }

    #[test]
    fn test_render_overview_values() {
        let report = render(&sample_result());
        assert!(report.contains("Sleep hours per day : "));
        // No feed rows in the sample: the scalar renders as a dash.
        assert!(report.contains("Feeds per day       : -"));
    }

    #[test]
    fn test_render_empty_result_is_graceful() {
        let result = analyze_events(Vec::new(), None, &NormalizerConfig::default());
        let report = render(&result);

        assert!(report.contains("(no qualifying nights)"));
        assert!(report.contains("(no measurements)"));
        assert!(report.contains("Sleep hours per day : -"));
    }

    #[test]
    fn test_render_timeline_lines() {
        let report = render(&sample_result());
        // The surviving overnight sleep splits at the day boundary.
        assert!(report.contains("23:59:59"));
        assert!(report.contains("00:00:00"));
    }
}

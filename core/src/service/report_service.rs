use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::entry::TimeEntry;
use crate::model::palette::Palette;
use crate::model::report::{AggregatedTotal, ChartSeries, Report, SkippedEntries};
use crate::time::parse_timestamp;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Filter stage: drop invalid and soft-deleted entries, parse timestamps,
/// emit (name, hours) pairs. A single bad record never fails the pipeline;
/// exclusions are counted per rule instead.
///
/// Rules short-circuit in order: missing name, then soft-delete marker, then
/// unparseable timestamps. An entry with end before start is kept and clamped
/// to zero hours (data-quality anomaly, not an exclusion).
pub fn filter_and_normalize(entries: &[TimeEntry]) -> (Vec<(String, f64)>, SkippedEntries) {
    let mut pairs = Vec::with_capacity(entries.len());
    let mut skipped = SkippedEntries::default();

    for entry in entries {
        let Some(name) = entry.employee_name() else {
            skipped.missing_name += 1;
            continue;
        };
        if entry.is_deleted() {
            skipped.soft_deleted += 1;
            continue;
        }
        let start = entry.start_time_utc.as_deref().and_then(parse_timestamp);
        let end = entry.end_time_utc.as_deref().and_then(parse_timestamp);
        let (Some(start), Some(end)) = (start, end) else {
            skipped.bad_timestamps += 1;
            continue;
        };

        let ms = (end - start).num_milliseconds().max(0);
        pairs.push((name.to_string(), ms as f64 / MS_PER_HOUR));
    }

    (pairs, skipped)
}

/// Aggregate stage: running sum per name. Grouping is exact string equality;
/// two spellings of the same person stay distinct on purpose.
pub fn aggregate_hours(pairs: impl IntoIterator<Item = (String, f64)>) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for (name, hours) in pairs {
        *totals.entry(name).or_default() += hours;
    }
    totals
}

/// Order totals descending by hours. The map iteration order never leaks into
/// the output: ties break by ascending name, so the result is fully
/// deterministic.
fn sort_totals(totals: HashMap<String, f64>) -> Vec<AggregatedTotal> {
    let mut rows: Vec<AggregatedTotal> = totals
        .into_iter()
        .map(|(name, total_hours)| AggregatedTotal { name, total_hours })
        .collect();
    rows.sort_by(|a, b| {
        b.total_hours
            .partial_cmp(&a.total_hours)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

/// Run the whole pipeline: raw entries -> sorted totals, grand total, chart
/// series, skip counters. Pure function of its input; safe to call as often
/// as the entry list changes.
pub fn build_report(entries: &[TimeEntry], palette: &Palette) -> Report {
    let (pairs, skipped) = filter_and_normalize(entries);
    let totals = sort_totals(aggregate_hours(pairs));

    let grand_total_hours: f64 = totals.iter().map(|t| t.total_hours).sum();

    let chart = ChartSeries {
        labels: totals.iter().map(|t| t.name.clone()).collect(),
        values: totals.iter().map(|t| t.total_hours).collect(),
        colors: (0..totals.len())
            .map(|i| palette.color_at(i).css())
            .collect(),
    };

    Report {
        totals,
        grand_total_hours,
        skipped,
        chart,
    }
}

/// Tooltip string for one chart slice: value to 2 decimals, share of the
/// grand total to 1 decimal. A zero grand total reports 0.0% instead of
/// dividing by zero.
pub fn tooltip_label(label: &str, value: f64, grand_total_hours: f64) -> String {
    let pct = if grand_total_hours > 0.0 {
        value / grand_total_hours * 100.0
    } else {
        0.0
    };
    format!("{}: {:.2}h ({:.1}%)", label, value, pct)
}

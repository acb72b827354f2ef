use serde::{Deserialize, Serialize};

/// Summed worked hours for one employee across all surviving entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedTotal {
    pub name: String,
    pub total_hours: f64,
}

/// Counts of entries excluded by the filter stage, per rule. Dropping bad
/// records is deliberate leniency, but callers still get to report data
/// quality without the engine logging or failing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkippedEntries {
    pub missing_name: usize,
    pub soft_deleted: usize,
    pub bad_timestamps: usize,
}

impl SkippedEntries {
    pub fn total(&self) -> usize {
        self.missing_name + self.soft_deleted + self.bad_timestamps
    }

    pub fn any(&self) -> bool {
        self.total() > 0
    }
}

/// Parallel label/value/color sequences for a proportional chart. The three
/// vectors are always index-aligned with the sorted totals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

/// Everything the engine derives from one raw entry list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub totals: Vec<AggregatedTotal>,
    pub grand_total_hours: f64,
    pub skipped: SkippedEntries,
    pub chart: ChartSeries,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Share of the grand total for one row, 0 when there is no data.
    pub fn share_percent(&self, value: f64) -> f64 {
        if self.grand_total_hours > 0.0 {
            value / self.grand_total_hours * 100.0
        } else {
            0.0
        }
    }

    /// Tooltip string for one slice, e.g. "Alice: 3.00h (50.0%)".
    pub fn tooltip(&self, label: &str, value: f64) -> String {
        crate::service::report_service::tooltip_label(label, value, self.grand_total_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_totals() {
        let skipped = SkippedEntries {
            missing_name: 1,
            soft_deleted: 2,
            bad_timestamps: 3,
        };
        assert_eq!(skipped.total(), 6);
        assert!(skipped.any());
        assert!(!SkippedEntries::default().any());
    }

    #[test]
    fn test_share_percent_guards_zero_grand_total() {
        let report = Report {
            totals: vec![],
            grand_total_hours: 0.0,
            skipped: SkippedEntries::default(),
            chart: ChartSeries::default(),
        };
        assert_eq!(report.share_percent(5.0), 0.0);
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let report = Report {
            totals: vec![AggregatedTotal {
                name: "Alice".to_string(),
                total_hours: 2.0,
            }],
            grand_total_hours: 2.0,
            skipped: SkippedEntries::default(),
            chart: ChartSeries {
                labels: vec!["Alice".to_string()],
                values: vec![2.0],
                colors: vec!["hsl(0 65% 55%)".to_string()],
            },
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"grandTotalHours\":2.0"));
        assert!(json.contains("\"totalHours\":2.0"));
        assert!(json.contains("\"badTimestamps\":0"));
    }
}

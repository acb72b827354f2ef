use serde::{Deserialize, Serialize};

/// One raw time-tracking record as the upstream endpoint serves it.
///
/// The upstream JSON uses PascalCase keys, and "StarTimeUtc" genuinely
/// misses a "t" — the rename below mirrors the wire, not a typo here.
/// Timestamps stay as raw strings so a single malformed record cannot
/// fail deserialization of the whole array; parsing happens later in
/// the filter stage.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TimeEntry {
    #[serde(rename = "Id", default)]
    pub id: Option<String>,
    #[serde(rename = "EmployeeName", default)]
    pub employee_name: Option<String>,
    #[serde(rename = "StarTimeUtc", default)]
    pub start_time_utc: Option<String>,
    #[serde(rename = "EndTimeUtc", default)]
    pub end_time_utc: Option<String>,
    #[serde(rename = "EntryNotes", default)]
    pub notes: Option<String>,
    #[serde(rename = "DeletedOn", default)]
    pub deleted_on: Option<String>,
}

impl TimeEntry {
    /// A non-null, non-empty DeletedOn marks the entry as logically deleted,
    /// regardless of what the other fields say.
    pub fn is_deleted(&self) -> bool {
        self.deleted_on.as_deref().is_some_and(|d| !d.is_empty())
    }

    pub fn employee_name(&self) -> Option<&str> {
        self.employee_name.as_deref().filter(|n| !n.is_empty())
    }
}

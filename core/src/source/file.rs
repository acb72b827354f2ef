use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::model::entry::TimeEntry;
use crate::source::traits::EntrySource;

/// Reads the same JSON entry array from a local file. Used for offline runs
/// and fixtures.
pub struct FileEntrySource {
    path: PathBuf,
}

impl FileEntrySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EntrySource for FileEntrySource {
    fn fetch(&self) -> Result<Vec<TimeEntry>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open entries file {}", self.path.display()))?;
        let reader = BufReader::new(file);
        // Same null-body tolerance as the HTTP source.
        let entries: Option<Vec<TimeEntry>> = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse entries file {}", self.path.display()))?;
        Ok(entries.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_fetch_reads_array() {
        let file = write_fixture(
            r#"[
                {"Id": "1", "EmployeeName": "Alice",
                 "StarTimeUtc": "2024-01-01T00:00:00", "EndTimeUtc": "2024-01-01T02:00:00",
                 "EntryNotes": null, "DeletedOn": null}
            ]"#,
        );
        let entries = FileEntrySource::new(file.path()).fetch().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].employee_name(), Some("Alice"));
    }

    #[test]
    fn test_null_body_is_empty_list() {
        let file = write_fixture("null");
        let entries = FileEntrySource::new(file.path()).fetch().unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = FileEntrySource::new("/nonexistent/entries.json")
            .fetch()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let file = write_fixture("{not json");
        assert!(FileEntrySource::new(file.path()).fetch().is_err());
    }
}

use crate::model::entry::TimeEntry;
use anyhow::Result;

/// Where raw entries come from. The engine itself never fetches; callers
/// pick a source, fetch once, and hand the complete list to the pipeline.
pub trait EntrySource {
    fn fetch(&self) -> Result<Vec<TimeEntry>>;
}

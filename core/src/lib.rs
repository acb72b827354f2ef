pub mod model;
pub mod service;
pub mod source;
pub mod time;

pub use model::entry::TimeEntry;
pub use model::palette::{HslColor, Palette};
pub use model::report::{AggregatedTotal, ChartSeries, Report, SkippedEntries};
pub use service::report_service::{build_report, tooltip_label};
pub use source::{EntrySource, FileEntrySource, HttpEntrySource};
pub use time::parse_timestamp;

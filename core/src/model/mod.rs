pub mod entry;
pub mod palette;
pub mod report;

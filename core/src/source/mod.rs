pub mod file;
pub mod http;
pub mod traits;

// Re-export
pub use file::FileEntrySource;
pub use http::HttpEntrySource;
pub use traits::EntrySource;

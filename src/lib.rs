// Declare our modules
pub mod analyzer;
pub mod cli;
pub mod error;
pub mod formatter;
pub mod loader;
pub mod parser;

// Re-export key types for convenience
pub use analyzer::{LevelCounts, count_by_level, filter_by_level};
pub use cli::Args;
pub use error::{LoadError, ParseError};
pub use loader::{LineWarning, LoadReport, LogCollection, load_from_reader, load_logs};
pub use parser::{LogRecord, parse_line};

//! Error types for the sweeper library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sweeper operations.
#[derive(Debug, Error)]
pub enum SweeperError {
    /// Error reading, writing or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record does not fit the table structure.
    #[error("Parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No header row to build a table from.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Unknown cleaning option value.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for sweeper operations.
pub type Result<T> = std::result::Result<T, SweeperError>;

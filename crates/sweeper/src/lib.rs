//! Sweeper: clean tabular datasets.
//!
//! A table goes through three steps, always in this order:
//!
//! - **Deduplication**: drop rows that repeat an earlier row exactly
//! - **Missing values**: drop incomplete rows, or fill numeric gaps with the column mean or median
//! - **Outliers**: drop rows with a numeric value outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`
//!
//! Cleaning never modifies its input; a new table is returned.
//!
//! # Example
//!
//! ```no_run
//! use sweeper::{CleaningOptions, MissingStrategy, Sweeper};
//!
//! let sweeper = Sweeper::new();
//! let dataset = sweeper.load("data.csv").unwrap();
//!
//! let options = CleaningOptions::new().with_missing(MissingStrategy::FillMedian);
//! let outcome = sweeper.clean(&dataset, &options);
//!
//! println!("Rows: {} -> {}", outcome.report.rows_before, outcome.report.rows_after);
//! sweeper.export(&outcome.table, "cleaned_data.csv").unwrap();
//! ```

pub mod clean;
pub mod error;
pub mod input;
pub mod output;
pub mod stats;
pub mod table;

mod sweeper;

pub use crate::sweeper::{CleaningOutcome, Dataset, Sweeper, SweeperConfig};
pub use clean::{CleaningOptions, CleaningReport, MissingStrategy, TableCleaner, clean};
pub use error::{Result, SweeperError};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use output::{CSV_MIME_TYPE, DEFAULT_PREVIEW_ROWS, DOWNLOAD_FILE_NAME, TablePreview};
pub use stats::{ColumnSummary, NumericStatistics};
pub use table::{Column, ColumnType, Row, Table, Value};

//! Main Sweeper struct and public API.

use std::path::Path;

use tracing::info;

use crate::clean::{CleaningOptions, CleaningReport, TableCleaner};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::output::{self, DEFAULT_PREVIEW_ROWS, TablePreview};
use crate::table::Table;

/// Configuration for loading and previewing data.
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Rows shown in previews.
    pub preview_rows: usize,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// A loaded table together with where it came from.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The parsed table.
    pub table: Table,
}

/// Result of cleaning a table.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    /// The cleaned table.
    pub table: Table,
    /// What each cleaning step did.
    pub report: CleaningReport,
    /// The options that were applied.
    pub options: CleaningOptions,
}

/// Loads, cleans, previews and exports tabular data.
pub struct Sweeper {
    config: SweeperConfig,
    parser: Parser,
    cleaner: TableCleaner,
}

impl Sweeper {
    /// Create a new Sweeper instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(SweeperConfig::default())
    }

    /// Create a Sweeper instance with custom configuration.
    pub fn with_config(config: SweeperConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());

        Self {
            config,
            parser,
            cleaner: TableCleaner::new(),
        }
    }

    /// Set the number of rows shown in previews.
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.config.preview_rows = rows;
        self
    }

    /// Load a CSV file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let (table, source) = self.parser.parse_file(path)?;
        Ok(Dataset { source, table })
    }

    /// Load uploaded CSV contents.
    pub fn load_bytes(&self, name: impl Into<String>, bytes: &[u8]) -> Result<Dataset> {
        let (table, source) = self.parser.parse_bytes(name, bytes)?;
        Ok(Dataset { source, table })
    }

    /// Clean a loaded dataset.
    pub fn clean(&self, dataset: &Dataset, options: &CleaningOptions) -> CleaningOutcome {
        let outcome = self.clean_table(&dataset.table, options);
        info!(
            file = %dataset.source.file,
            rows_before = outcome.report.rows_before,
            rows_after = outcome.report.rows_after,
            "cleaned dataset"
        );
        outcome
    }

    /// Clean a table.
    pub fn clean_table(&self, table: &Table, options: &CleaningOptions) -> CleaningOutcome {
        let (table, report) = self.cleaner.clean_with_report(table, options);
        CleaningOutcome {
            table,
            report,
            options: *options,
        }
    }

    /// Preview the first rows of a table.
    pub fn preview(&self, table: &Table) -> TablePreview {
        TablePreview::new(table, self.config.preview_rows)
    }

    /// Write a table to a CSV file.
    pub fn export(&self, table: &Table, path: impl AsRef<Path>) -> Result<()> {
        output::write_csv_file(table, path)
    }

    /// Serialize a table to CSV bytes for download.
    pub fn export_bytes(&self, table: &Table) -> Result<Vec<u8>> {
        output::to_csv_bytes(table)
    }
}

impl Default for Sweeper {
    fn default() -> Self {
        Self::new()
    }
}

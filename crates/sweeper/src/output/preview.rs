//! First-rows preview of a table.

use indexmap::IndexMap;
use serde::Serialize;

use crate::stats::ColumnSummary;
use crate::table::{Table, Value};

/// Number of rows shown in a preview unless configured otherwise.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// The first rows of a table plus a per-column summary.
#[derive(Debug, Clone, Serialize)]
pub struct TablePreview {
    /// Summary of every column, in table order.
    pub columns: Vec<ColumnSummary>,
    /// First rows as ordered `column -> value` objects.
    pub rows: Vec<IndexMap<String, Value>>,
    /// Row count of the whole table.
    pub total_rows: usize,
    /// Whether rows were left out of the preview.
    pub truncated: bool,
}

impl TablePreview {
    /// Build a preview of the first `limit` rows.
    pub fn new(table: &Table, limit: usize) -> Self {
        let rows = table
            .rows()
            .take(limit)
            .map(|row| {
                row.iter()
                    .map(|(name, value)| (name.to_string(), value.clone()))
                    .collect()
            })
            .collect();

        Self {
            columns: ColumnSummary::summarize(table),
            rows,
            total_rows: table.row_count(),
            truncated: table.row_count() > limit,
        }
    }
}

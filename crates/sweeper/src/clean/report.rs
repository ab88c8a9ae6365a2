//! Record of what a cleaning run changed.

use serde::{Deserialize, Serialize};

/// Summary of a cleaning run, step by step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Rows in the input table.
    pub rows_before: usize,
    /// Rows in the cleaned table.
    pub rows_after: usize,
    /// Rows removed as exact duplicates of an earlier row.
    pub duplicates_removed: usize,
    /// Rows removed because they contained a missing value.
    pub missing_rows_dropped: usize,
    /// Fill applied to each numeric column that had missing cells.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<FillChange>,
    /// IQR fences computed for each numeric column.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outlier_bounds: Vec<OutlierBounds>,
    /// Rows removed because at least one numeric value was an outlier.
    pub outlier_rows_removed: usize,
}

impl CleaningReport {
    /// Create an empty report for an input of `rows_before` rows.
    pub fn new(rows_before: usize) -> Self {
        Self {
            rows_before,
            rows_after: rows_before,
            ..Self::default()
        }
    }

    /// Total number of rows removed by all steps.
    pub fn rows_removed(&self) -> usize {
        self.rows_before - self.rows_after
    }

    /// Total number of cells filled in.
    pub fn cells_filled(&self) -> usize {
        self.fills.iter().map(|f| f.cells_filled).sum()
    }
}

/// Missing-value fill applied to one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillChange {
    /// Column affected.
    pub column: String,
    /// Value written into missing cells; absent when the column has no values to compute from.
    pub fill_value: Option<f64>,
    /// Number of cells filled.
    pub cells_filled: usize,
}

/// IQR fences for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierBounds {
    pub column: String,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
    /// Rows whose value in this column lies outside the fences.
    pub rows_flagged: usize,
}

impl OutlierBounds {
    /// Check if a value falls strictly outside the fences.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

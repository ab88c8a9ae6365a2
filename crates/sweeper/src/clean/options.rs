//! Cleaning options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SweeperError;

/// What to do with missing values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingStrategy {
    /// Remove every row that has a missing value in any column.
    #[default]
    Drop,
    /// Fill missing numeric cells with the column mean.
    FillMean,
    /// Fill missing numeric cells with the column median.
    FillMedian,
}

impl MissingStrategy {
    /// All strategies, in the order they are offered to users.
    pub const ALL: [MissingStrategy; 3] = [
        MissingStrategy::Drop,
        MissingStrategy::FillMean,
        MissingStrategy::FillMedian,
    ];

    /// Wire name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingStrategy::Drop => "drop",
            MissingStrategy::FillMean => "fill_mean",
            MissingStrategy::FillMedian => "fill_median",
        }
    }
}

impl FromStr for MissingStrategy {
    type Err = SweeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "drop" => Ok(MissingStrategy::Drop),
            "fill_mean" | "mean" => Ok(MissingStrategy::FillMean),
            "fill_median" | "median" => Ok(MissingStrategy::FillMedian),
            _ => Err(SweeperError::InvalidOption(format!(
                "Unknown missing-value strategy: {}. Use drop, fill_mean, or fill_median.",
                s
            ))),
        }
    }
}

impl fmt::Display for MissingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three independent cleaning switches.
///
/// Missing fields deserialize to their defaults, so `{}` is a valid
/// request body meaning "use the defaults".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
    /// Remove rows that repeat an earlier row exactly.
    pub remove_duplicates: bool,
    /// How to handle missing values.
    pub handle_missing: MissingStrategy,
    /// Remove rows with a value outside the IQR fences of its column.
    pub remove_outliers: bool,
}

impl CleaningOptions {
    /// Create options with the defaults (dedupe, drop missing, remove outliers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether duplicate rows are removed.
    pub fn with_remove_duplicates(mut self, remove: bool) -> Self {
        self.remove_duplicates = remove;
        self
    }

    /// Set the missing-value strategy.
    pub fn with_missing(mut self, strategy: MissingStrategy) -> Self {
        self.handle_missing = strategy;
        self
    }

    /// Set whether outlier rows are removed.
    pub fn with_remove_outliers(mut self, remove: bool) -> Self {
        self.remove_outliers = remove;
        self
    }
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            remove_duplicates: true,
            handle_missing: MissingStrategy::Drop,
            remove_outliers: true,
        }
    }
}

//! Column statistics: mean, median, interpolated quantiles and IQR bounds.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::table::{ColumnType, Table, Value};

/// Multiplier applied to the interquartile range when flagging outliers.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Sort values ascending.
pub fn sort_values(values: &mut [f64]) {
    values.sort_by(|a, b| a.total_cmp(b));
}

/// Quantile of ascending-sorted values, `q` in `[0, 1]`.
///
/// Interpolates linearly between the two order statistics around
/// position `q * (n - 1)`.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }

    let idx = q * (sorted.len() - 1) as f64;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper {
        Some(sorted[lower])
    } else {
        let weight = idx - lower as f64;
        Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
    }
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Median (the 50th percentile).
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sort_values(&mut sorted);
    quantile(&sorted, 0.5)
}

/// Statistics for numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    /// Number of non-missing values.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (0 for fewer than two values).
    pub std: f64,
    pub min: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    pub median: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    pub max: f64,
}

impl NumericStatistics {
    /// Compute statistics over non-missing values. `None` when there are none.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sort_values(&mut sorted);

        let count = sorted.len();
        let mean = mean(&sorted)?;

        // Welford's algorithm for a stable variance
        let mut running_mean = 0.0;
        let mut m2 = 0.0;
        for (i, &value) in sorted.iter().enumerate() {
            let delta = value - running_mean;
            running_mean += delta / (i + 1) as f64;
            m2 += delta * (value - running_mean);
        }
        let std = if count < 2 {
            0.0
        } else {
            (m2 / (count - 1) as f64).sqrt()
        };

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q1: quantile(&sorted, 0.25)?,
            median: quantile(&sorted, 0.5)?,
            q3: quantile(&sorted, 0.75)?,
            max: sorted[count - 1],
        })
    }

    /// Calculate the interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Inclusive `(lower, upper)` range outside of which values are outliers.
    pub fn bounds(&self) -> (f64, f64) {
        let iqr = self.iqr();
        (self.q1 - IQR_MULTIPLIER * iqr, self.q3 + IQR_MULTIPLIER * iqr)
    }

    /// Check if a value is an outlier using the IQR method.
    pub fn is_outlier_iqr(&self, value: f64) -> bool {
        let (lower, upper) = self.bounds();
        value < lower || value > upper
    }
}

/// Per-column overview used for previews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Inferred data type.
    pub column_type: ColumnType,
    /// Total number of cells (including missing).
    pub count: usize,
    /// Number of missing cells.
    pub missing_count: usize,
    /// Number of distinct non-missing values.
    pub unique_count: usize,
    /// Numeric statistics (for numeric columns with at least one value).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericStatistics>,
}

impl ColumnSummary {
    /// Summarize one column of a table.
    pub fn from_table(table: &Table, index: usize) -> Option<Self> {
        let column = table.columns().get(index)?;

        let mut missing_count = 0;
        let mut distinct: HashSet<&Value> = HashSet::new();
        for value in table.column_values(index) {
            if value.is_missing() {
                missing_count += 1;
            } else {
                distinct.insert(value);
            }
        }

        let numeric = if column.is_numeric() {
            NumericStatistics::from_values(&table.numeric_values(index))
        } else {
            None
        };

        Some(Self {
            name: column.name.clone(),
            column_type: column.column_type,
            count: table.row_count(),
            missing_count,
            unique_count: distinct.len(),
            numeric,
        })
    }

    /// Summarize every column of a table.
    pub fn summarize(table: &Table) -> Vec<Self> {
        (0..table.column_count())
            .filter_map(|idx| Self::from_table(table, idx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.25), Some(1.75));
        assert_eq!(quantile(&sorted, 0.5), Some(2.5));
        assert_eq!(quantile(&sorted, 0.75), Some(3.25));
        assert_eq!(quantile(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile(&sorted, 1.0), Some(4.0));
    }

    #[test]
    fn test_quantile_exact_order_statistic() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 100.0];
        assert_eq!(quantile(&sorted, 0.25), Some(2.0));
        assert_eq!(quantile(&sorted, 0.75), Some(4.0));
    }

    #[test]
    fn test_quantile_rejects_bad_input() {
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[1.0], 1.5), None);
        assert_eq!(quantile(&[7.0], 0.3), Some(7.0));
    }

    #[test]
    fn test_mean_and_median() {
        assert_eq!(mean(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), Some(2.5));
        let m = mean(&[1.0, 2.0, 4.0]).unwrap();
        assert!((m - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_iqr_bounds() {
        let stats = NumericStatistics::from_values(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert_eq!(stats.iqr(), 2.0);
        assert_eq!(stats.bounds(), (-1.0, 7.0));
        assert!(stats.is_outlier_iqr(100.0));
        assert!(!stats.is_outlier_iqr(7.0));
        assert!(!stats.is_outlier_iqr(-1.0));
        assert!(stats.is_outlier_iqr(-1.5));
    }

    #[test]
    fn test_sample_std() {
        let stats = NumericStatistics::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((stats.std - 2.138089935299395).abs() < 1e-12);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_column_summary() {
        let table = Table::new(
            ["a", "b"],
            vec![
                vec![1.into(), "x".into()],
                vec![1.into(), Value::Missing],
                vec![3.into(), "y".into()],
            ],
        );
        let summary = ColumnSummary::summarize(&table);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].unique_count, 2);
        assert_eq!(summary[0].numeric.as_ref().unwrap().count, 3);
        assert_eq!(summary[1].missing_count, 1);
        assert!(summary[1].numeric.is_none());
    }
}

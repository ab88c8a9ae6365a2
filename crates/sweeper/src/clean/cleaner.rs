//! The table cleaner: deduplication, missing values, IQR outliers.

use std::collections::HashSet;

use tracing::debug;

use super::options::{CleaningOptions, MissingStrategy};
use super::report::{CleaningReport, FillChange, OutlierBounds};
use crate::stats::{self, NumericStatistics};
use crate::table::{Table, Value};

/// Applies cleaning options to a table.
///
/// Steps run in a fixed order, each on the previous step's output:
/// deduplication, missing-value handling, outlier removal. The input
/// table is never modified.
pub struct TableCleaner;

impl TableCleaner {
    /// Create a new table cleaner.
    pub fn new() -> Self {
        Self
    }

    /// Clean a table and return the result.
    pub fn clean(&self, table: &Table, options: &CleaningOptions) -> Table {
        self.clean_with_report(table, options).0
    }

    /// Clean a table and describe what each step did.
    pub fn clean_with_report(
        &self,
        table: &Table,
        options: &CleaningOptions,
    ) -> (Table, CleaningReport) {
        let mut report = CleaningReport::new(table.row_count());
        let mut current = table.clone();

        if options.remove_duplicates {
            let (deduped, removed) = drop_duplicates(current);
            debug!(removed, rows = deduped.row_count(), "removed duplicate rows");
            report.duplicates_removed = removed;
            current = deduped;
        }

        current = match options.handle_missing {
            MissingStrategy::Drop => {
                let (kept, dropped) = drop_missing(current);
                debug!(dropped, rows = kept.row_count(), "dropped rows with missing values");
                report.missing_rows_dropped = dropped;
                kept
            }
            MissingStrategy::FillMean => {
                let (filled, fills) = fill_missing(current, stats::mean);
                debug!(columns = fills.len(), "filled missing values with column means");
                report.fills = fills;
                filled
            }
            MissingStrategy::FillMedian => {
                let (filled, fills) = fill_missing(current, stats::median);
                debug!(columns = fills.len(), "filled missing values with column medians");
                report.fills = fills;
                filled
            }
        };

        if options.remove_outliers {
            let (kept, bounds, removed) = drop_outliers(current);
            debug!(removed, rows = kept.row_count(), "removed IQR outlier rows");
            report.outlier_bounds = bounds;
            report.outlier_rows_removed = removed;
            current = kept;
        }

        report.rows_after = current.row_count();
        (current, report)
    }

    /// Remove rows that exactly repeat an earlier row, keeping the first.
    pub fn deduplicate(&self, table: &Table) -> Table {
        drop_duplicates(table.clone()).0
    }

    /// Apply one missing-value strategy on its own.
    pub fn handle_missing(&self, table: &Table, strategy: MissingStrategy) -> Table {
        match strategy {
            MissingStrategy::Drop => drop_missing(table.clone()).0,
            MissingStrategy::FillMean => fill_missing(table.clone(), stats::mean).0,
            MissingStrategy::FillMedian => fill_missing(table.clone(), stats::median).0,
        }
    }

    /// Remove rows holding an IQR outlier in any numeric column.
    pub fn remove_outliers(&self, table: &Table) -> Table {
        drop_outliers(table.clone()).0
    }
}

impl Default for TableCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Clean a table with the given options.
pub fn clean(table: &Table, options: &CleaningOptions) -> Table {
    TableCleaner::new().clean(table, options)
}

/// Keep rows selected by `keep`, returning the new table and the number removed.
fn retain_rows(table: Table, keep: &[bool]) -> (Table, usize) {
    let (columns, rows) = table.into_parts();
    let before = rows.len();

    let kept: Vec<Vec<Value>> = rows
        .into_iter()
        .zip(keep)
        .filter(|(_, keep)| **keep)
        .map(|(row, _)| row)
        .collect();

    let removed = before - kept.len();
    (Table::with_columns(columns, kept), removed)
}

fn drop_duplicates(table: Table) -> (Table, usize) {
    let keep: Vec<bool> = {
        let mut seen: HashSet<&[Value]> = HashSet::new();
        table
            .records()
            .iter()
            .map(|row| seen.insert(row.as_slice()))
            .collect()
    };
    retain_rows(table, &keep)
}

fn drop_missing(table: Table) -> (Table, usize) {
    let keep: Vec<bool> = table.rows().map(|row| !row.has_missing()).collect();
    retain_rows(table, &keep)
}

/// Fill missing cells of each numeric column with `fill_value` of its
/// non-missing values. Columns with nothing to compute from stay as they are.
fn fill_missing(table: Table, fill_value: fn(&[f64]) -> Option<f64>) -> (Table, Vec<FillChange>) {
    let numeric = table.numeric_column_indices();
    let fill_values: Vec<(usize, Option<f64>)> = numeric
        .into_iter()
        .filter(|&idx| table.column_values(idx).any(Value::is_missing))
        .map(|idx| (idx, fill_value(&table.numeric_values(idx))))
        .collect();

    let (columns, mut rows) = table.into_parts();
    let mut fills = Vec::with_capacity(fill_values.len());

    for (idx, value) in fill_values {
        let mut cells_filled = 0;
        if let Some(value) = value {
            for row in rows.iter_mut() {
                if row[idx].is_missing() {
                    row[idx] = Value::Number(value);
                    cells_filled += 1;
                }
            }
        }
        fills.push(FillChange {
            column: columns[idx].name.clone(),
            fill_value: value,
            cells_filled,
        });
    }

    (Table::with_columns(columns, rows), fills)
}

/// Fences are computed for every numeric column before any row is removed.
fn drop_outliers(table: Table) -> (Table, Vec<OutlierBounds>, usize) {
    let mut fences: Vec<(usize, OutlierBounds)> = Vec::new();

    for idx in table.numeric_column_indices() {
        let Some(stats) = NumericStatistics::from_values(&table.numeric_values(idx)) else {
            continue;
        };
        let (lower, upper) = stats.bounds();
        let rows_flagged = table
            .column_values(idx)
            .filter_map(Value::as_f64)
            .filter(|&v| stats.is_outlier_iqr(v))
            .count();
        fences.push((
            idx,
            OutlierBounds {
                column: table.columns()[idx].name.clone(),
                q1: stats.q1,
                q3: stats.q3,
                iqr: stats.iqr(),
                lower,
                upper,
                rows_flagged,
            },
        ));
    }

    let keep: Vec<bool> = table
        .records()
        .iter()
        .map(|row| {
            !fences.iter().any(|(idx, bounds)| {
                row[*idx].as_f64().is_some_and(|v| bounds.is_outlier(v))
            })
        })
        .collect();

    let (kept, removed) = retain_rows(table, &keep);
    let bounds = fences.into_iter().map(|(_, b)| b).collect();
    (kept, bounds, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnType;

    fn options(dedupe: bool, missing: MissingStrategy, outliers: bool) -> CleaningOptions {
        CleaningOptions::new()
            .with_remove_duplicates(dedupe)
            .with_missing(missing)
            .with_remove_outliers(outliers)
    }

    #[test]
    fn test_dedupe_then_drop_missing() {
        let table = Table::new(
            ["a", "b"],
            vec![
                vec![1.into(), 2.into()],
                vec![1.into(), 2.into()],
                vec![3.into(), Value::Missing],
            ],
        );

        let (cleaned, report) = TableCleaner::new()
            .clean_with_report(&table, &options(true, MissingStrategy::Drop, false));

        assert_eq!(cleaned.records(), &[vec![Value::from(1), Value::from(2)]]);
        assert_eq!(report.duplicates_removed, 1);
        assert_eq!(report.missing_rows_dropped, 1);
        assert_eq!(report.rows_removed(), 2);
    }

    #[test]
    fn test_outlier_row_removed() {
        let table = Table::new(
            ["a"],
            vec![vec![1.into()], vec![2.into()], vec![3.into()], vec![4.into()], vec![100.into()]],
        );

        let (cleaned, report) = TableCleaner::new()
            .clean_with_report(&table, &options(false, MissingStrategy::Drop, true));

        assert_eq!(cleaned.numeric_values(0), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(report.outlier_rows_removed, 1);
        let bounds = &report.outlier_bounds[0];
        assert_eq!((bounds.q1, bounds.q3, bounds.upper), (2.0, 4.0, 7.0));
        assert_eq!(bounds.rows_flagged, 1);
    }

    #[test]
    fn test_fill_mean() {
        let table = Table::new(
            ["a"],
            vec![vec![1.into()], vec![2.into()], vec![Value::Missing], vec![4.into()]],
        );

        let (cleaned, report) = TableCleaner::new()
            .clean_with_report(&table, &options(false, MissingStrategy::FillMean, false));

        let filled = cleaned.cell(2, 0).and_then(Value::as_f64).unwrap();
        assert!((filled - 7.0 / 3.0).abs() < 1e-12);
        assert_eq!(cleaned.row_count(), 4);
        assert_eq!(report.cells_filled(), 1);
    }

    #[test]
    fn test_fill_median() {
        let table = Table::new(
            ["a"],
            vec![vec![1.into()], vec![Value::Missing], vec![2.into()], vec![10.into()]],
        );

        let cleaned = TableCleaner::new().handle_missing(&table, MissingStrategy::FillMedian);

        assert_eq!(cleaned.cell(1, 0), Some(&Value::Number(2.0)));
    }

    #[test]
    fn test_fill_leaves_text_columns_missing() {
        let table = Table::new(
            ["n", "label"],
            vec![
                vec![1.into(), "x".into()],
                vec![Value::Missing, Value::Missing],
            ],
        );

        let cleaned = TableCleaner::new().handle_missing(&table, MissingStrategy::FillMean);

        assert_eq!(cleaned.cell(1, 0), Some(&Value::Number(1.0)));
        assert_eq!(cleaned.cell(1, 1), Some(&Value::Missing));
    }

    #[test]
    fn test_fill_all_missing_column_stays_missing() {
        let table = Table::new(["a", "b"], vec![vec![1.into(), Value::Missing], vec![2.into(), Value::Missing]]);
        assert_eq!(table.column("b").unwrap().column_type, ColumnType::Float);

        let (cleaned, report) = TableCleaner::new()
            .clean_with_report(&table, &options(false, MissingStrategy::FillMean, true));

        assert_eq!(cleaned.row_count(), 2);
        assert!(cleaned.column_values(1).all(Value::is_missing));
        assert_eq!(report.fills[0].fill_value, None);
        assert_eq!(report.fills[0].cells_filled, 0);
    }

    #[test]
    fn test_bounds_not_recomputed_after_removal() {
        // Removing 100 would make 10 an outlier on a second pass.
        let table = Table::new(
            ["a"],
            vec![
                vec![1.into()],
                vec![1.into()],
                vec![1.into()],
                vec![2.into()],
                vec![2.into()],
                vec![10.into()],
                vec![100.into()],
            ],
        );

        let cleaned = TableCleaner::new().remove_outliers(&table);
        let once = cleaned.numeric_values(0);
        let twice = TableCleaner::new().remove_outliers(&cleaned).numeric_values(0);

        assert_eq!(once, vec![1.0, 1.0, 1.0, 2.0, 2.0, 10.0]);
        assert!(!twice.contains(&10.0));
    }

    #[test]
    fn test_no_numeric_columns_is_noop() {
        let table = Table::new(
            ["name"],
            vec![vec!["a".into()], vec!["b".into()], vec!["zzzz".into()]],
        );

        let cleaned = clean(&table, &options(false, MissingStrategy::FillMedian, true));

        assert_eq!(cleaned, table);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(["a", "b"], Vec::new());
        for strategy in MissingStrategy::ALL {
            let (cleaned, report) = TableCleaner::new()
                .clean_with_report(&table, &options(true, strategy, true));
            assert!(cleaned.is_empty());
            assert_eq!(cleaned.column_names(), vec!["a", "b"]);
            assert_eq!(report.rows_removed(), 0);
        }
    }

    #[test]
    fn test_input_not_modified() {
        let table = Table::new(
            ["a"],
            vec![vec![1.into()], vec![1.into()], vec![Value::Missing]],
        );
        let snapshot = table.clone();

        let _ = clean(&table, &CleaningOptions::default());

        assert_eq!(table, snapshot);
    }

    #[test]
    fn test_missing_cells_never_flag_outliers() {
        let table = Table::new(
            ["a", "b"],
            vec![
                vec![1.into(), Value::Missing],
                vec![2.into(), 5.into()],
                vec![3.into(), 5.into()],
            ],
        );

        let cleaned = TableCleaner::new().remove_outliers(&table);

        assert_eq!(cleaned.row_count(), 3);
    }
}

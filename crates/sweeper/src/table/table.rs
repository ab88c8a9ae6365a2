//! In-memory table of typed cells.

use serde::Serialize;

use super::column::{Column, ColumnType};
use super::value::{Value, whole_i64};

/// Represents a parsed tabular dataset.
///
/// Rows are stored row-major and always have exactly one cell per column.
/// Tables are never modified in place by the cleaner; every transformation
/// builds a new table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table, inferring each column's type from its values.
    ///
    /// Short rows are padded with missing cells and long rows are truncated
    /// to the header width. Numbers are stored as `Integer` in integer
    /// columns and as `Number` in float columns.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>, rows: Vec<Vec<Value>>) -> Self {
        let names: Vec<String> = headers.into_iter().map(Into::into).collect();
        let mut rows = align_rows(rows, names.len());

        let columns: Vec<Column> = names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                let column_type = ColumnType::infer(rows.iter().map(|row| &row[idx]));
                Column::new(name, column_type)
            })
            .collect();

        for row in &mut rows {
            for (cell, column) in row.iter_mut().zip(&columns) {
                conform(cell, column.column_type);
            }
        }

        Self { columns, rows }
    }

    /// Create a table with known column metadata.
    pub fn with_columns(columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Self {
        let rows = align_rows(rows, columns.len());
        Self { columns, rows }
    }

    /// Create a table with the same columns as this one and the given rows.
    pub fn with_rows(&self, rows: Vec<Vec<Value>>) -> Self {
        Self::with_columns(self.columns.clone(), rows)
    }

    /// Get the column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get all column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get the position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Positions of all numeric columns.
    pub fn numeric_column_indices(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_numeric())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// Raw row data.
    pub fn records(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Get a specific cell value.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Non-missing numeric values of a column, in row order.
    pub fn numeric_values(&self, index: usize) -> Vec<f64> {
        self.column_values(index).filter_map(Value::as_f64).collect()
    }

    /// A new table holding the first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        self.with_rows(self.rows.iter().take(n).cloned().collect())
    }

    /// Split the table into its columns and rows.
    pub fn into_parts(self) -> (Vec<Column>, Vec<Vec<Value>>) {
        (self.columns, self.rows)
    }
}

fn align_rows(mut rows: Vec<Vec<Value>>, width: usize) -> Vec<Vec<Value>> {
    for row in &mut rows {
        row.resize(width, Value::Missing);
    }
    rows
}

fn conform(cell: &mut Value, column_type: ColumnType) {
    let converted = match (&*cell, column_type) {
        (Value::Number(n), ColumnType::Integer) => whole_i64(*n).map(Value::Integer),
        (Value::Integer(i), ColumnType::Float) => Some(Value::Number(*i as f64)),
        _ => None,
    };
    if let Some(value) = converted {
        *cell = value;
    }
}

/// A borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [Column],
    values: &'a [Value],
}

impl<'a> Row<'a> {
    /// Get a value by column name.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        let index = self.columns.iter().position(|c| c.name == name)?;
        self.values.get(index)
    }

    /// Cell values in column order.
    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    /// Iterate over `(column name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.columns
            .iter()
            .map(|c| c.name.as_str())
            .zip(self.values.iter())
    }

    /// Returns true if any cell in the row is missing.
    pub fn has_missing(&self) -> bool {
        self.values.iter().any(Value::is_missing)
    }
}

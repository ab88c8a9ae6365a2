//! CSV serialization of tables.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, SweeperError};
use crate::table::{ColumnType, Table, Value, whole_i64};

/// File name offered when the cleaned table is downloaded.
pub const DOWNLOAD_FILE_NAME: &str = "cleaned_data.csv";

/// MIME type of the download artifact.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Write a table as comma-separated text with a header row and no index column.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.column_names())?;

    for record in table.records() {
        let fields = record
            .iter()
            .zip(table.columns())
            .map(|(value, column)| format_cell(value, column.column_type));
        csv_writer.write_record(fields)?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Serialize a table to CSV bytes.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer)?;
    Ok(buffer)
}

/// Write a table to a CSV file, replacing any existing file.
pub fn write_csv_file(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SweeperError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_csv(table, file)
}

/// Render one cell for output.
///
/// Missing cells are empty. Float columns keep a decimal point on whole
/// numbers so that `2.0` does not read back as an integer column, and
/// switch to exponent form (`1e+16`) from 1e16 up.
pub fn format_cell(value: &Value, column_type: ColumnType) -> String {
    match (value, column_type) {
        (Value::Missing, _) => String::new(),
        (Value::Integer(i), ColumnType::Float) => format_float(*i as f64),
        (Value::Integer(i), _) => i.to_string(),
        (Value::Number(n), ColumnType::Integer) => match whole_i64(*n) {
            Some(i) => i.to_string(),
            None => format_float(*n),
        },
        (Value::Number(n), _) => format_float(*n),
        (Value::Text(s), _) => s.clone(),
    }
}

fn format_float(n: f64) -> String {
    if n.is_finite() && n.abs() >= 1e16 {
        format!("{:e}", n).replacen('e', "e+", 1)
    } else if n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_header_and_rows() {
        let table = Table::new(
            ["name", "count", "ratio"],
            vec![
                vec!["a".into(), 1.into(), 0.5.into()],
                vec!["b, c".into(), 2.into(), Value::Missing],
            ],
        );

        let csv = String::from_utf8(to_csv_bytes(&table).unwrap()).unwrap();

        assert_eq!(csv, "name,count,ratio\na,1,0.5\n\"b, c\",2,\n");
    }

    #[test]
    fn test_float_whole_numbers_keep_decimal() {
        assert_eq!(format_cell(&Value::Number(2.0), ColumnType::Float), "2.0");
        assert_eq!(format_cell(&Value::Number(2.0), ColumnType::Integer), "2");
        assert_eq!(
            format_cell(&Value::Number(7.0 / 3.0), ColumnType::Float),
            "2.3333333333333335"
        );
        assert_eq!(format_cell(&Value::Missing, ColumnType::Float), "");
    }

    #[test]
    fn test_large_floats_use_exponent() {
        assert_eq!(format_cell(&Value::Number(1e16), ColumnType::Float), "1e+16");
        assert_eq!(format_cell(&Value::Number(-1.5e17), ColumnType::Float), "-1.5e+17");
        assert_eq!(
            format_cell(&Value::Number(9_999_999_999_999_998.0), ColumnType::Float),
            "9999999999999998.0"
        );
    }

    #[test]
    fn test_large_integers_written_exactly() {
        let table = Table::new(
            ["id"],
            vec![vec![Value::Integer(9_007_199_254_740_993)], vec![Value::Integer(i64::MAX)]],
        );
        let csv = String::from_utf8(to_csv_bytes(&table).unwrap()).unwrap();
        assert_eq!(csv, "id\n9007199254740993\n9223372036854775807\n");
    }

    #[test]
    fn test_empty_table_writes_header() {
        let table = Table::new(["a", "b"], Vec::new());
        let csv = String::from_utf8(to_csv_bytes(&table).unwrap()).unwrap();
        assert_eq!(csv, "a,b\n");
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DOWNLOAD_FILE_NAME);
        let table = Table::new(["a"], vec![vec![1.into()]]);

        write_csv_file(&table, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\n1\n");
    }
}

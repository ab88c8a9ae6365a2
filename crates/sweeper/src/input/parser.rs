//! CSV parser with column type sniffing.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::SourceMetadata;
use crate::error::{Result, SweeperError};
use crate::table::{Column, ColumnType, Table, Value};

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

static INTEGER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+$").unwrap());

static FLOAT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$|^(?i)[+-]?(inf|infinity)$").unwrap()
});

/// Cell contents read as a missing value.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses delimited text into a [`Table`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the table and its metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| SweeperError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.parse_bytes(name, &contents)
    }

    /// Parse in-memory contents, e.g. an uploaded file.
    pub fn parse_bytes(&self, name: impl Into<String>, bytes: &[u8]) -> Result<(Table, SourceMetadata)> {
        let name = name.into();

        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.parse_table(bytes)?;

        debug!(
            file = %name,
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed table"
        );

        let metadata = SourceMetadata::new(
            name,
            hash,
            bytes.len() as u64,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    fn parse_table(&self, bytes: &[u8]) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut raw_rows: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            if let Some(max) = self.config.max_rows {
                if raw_rows.len() >= max {
                    break;
                }
            }
            let record = result?;
            raw_rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        let headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            // Generate column names
            let width = raw_rows.iter().map(Vec::len).max().unwrap_or(0);
            (0..width).map(|i| format!("column_{}", i + 1)).collect()
        };

        if headers.is_empty() {
            return Err(SweeperError::EmptyData("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        for (row_idx, row) in raw_rows.iter_mut().enumerate() {
            if row.len() > expected_cols {
                return Err(SweeperError::Parse {
                    row: row_idx + 1,
                    message: format!("expected {} fields, saw {}", expected_cols, row.len()),
                });
            }
            // Pad row if needed
            row.resize(expected_cols, String::new());
        }

        let columns: Vec<Column> = unique_headers(headers)
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                let column_type = sniff_column_type(raw_rows.iter().map(|row| row[idx].as_str()));
                Column::new(name, column_type)
            })
            .collect();

        let rows: Vec<Vec<Value>> = raw_rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&columns)
                    .map(|(raw, column)| to_value(raw, column.column_type))
                    .collect()
            })
            .collect();

        Ok(Table::with_columns(columns, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if raw cell content represents a missing value.
///
/// Tokens must match the whole field; surrounding whitespace makes it text.
pub fn is_null_value(value: &str) -> bool {
    NA_TOKENS.contains(&value)
}

/// Classification of one raw cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Missing,
    Integer,
    Float,
    Text,
}

fn classify(value: &str) -> CellKind {
    if is_null_value(value) {
        return CellKind::Missing;
    }

    let trimmed = value.trim();
    if INTEGER_PATTERN.is_match(trimmed) && trimmed.parse::<i64>().is_ok() {
        CellKind::Integer
    } else if FLOAT_PATTERN.is_match(trimmed) && trimmed.parse::<f64>().is_ok() {
        CellKind::Float
    } else {
        CellKind::Text
    }
}

/// Decide a column type from its raw cell contents.
fn sniff_column_type<'a>(values: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut seen = false;
    let mut has_missing = false;
    let mut has_float = false;

    for value in values {
        seen = true;
        match classify(value) {
            CellKind::Missing => has_missing = true,
            CellKind::Integer => {}
            CellKind::Float => has_float = true,
            CellKind::Text => return ColumnType::Text,
        }
    }

    if !seen {
        ColumnType::Text
    } else if has_missing || has_float {
        ColumnType::Float
    } else {
        ColumnType::Integer
    }
}

fn to_value(raw: String, column_type: ColumnType) -> Value {
    if is_null_value(&raw) {
        return Value::Missing;
    }

    match column_type {
        ColumnType::Integer => match raw.trim().parse::<i64>() {
            Ok(n) => Value::Integer(n),
            Err(_) => Value::Text(raw),
        },
        ColumnType::Float => match raw.trim().parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(raw),
        },
        ColumnType::Text => Value::Text(raw),
    }
}

/// Rename repeated header names to `name.1`, `name.2`, ...
fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut result = Vec::with_capacity(headers.len());

    for header in headers {
        let mut name = header.clone();
        let mut suffix = 1;
        while taken.contains(&name) {
            name = format!("{}.{}", header, suffix);
            suffix += 1;
        }
        taken.insert(name.clone());
        result.push(name);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &[u8]) -> Result<Table> {
        Parser::new().parse_table(data)
    }

    #[test]
    fn test_parse_csv() {
        let table = parse(b"name,age,city\nAlice,30,NYC\nBob,25,LA").unwrap();

        assert_eq!(table.column_names(), vec!["name", "age", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), Some(&Value::from("Alice")));
        assert_eq!(table.cell(1, 1), Some(&Value::Integer(25)));
        assert_eq!(table.column("age").unwrap().column_type, ColumnType::Integer);
        assert_eq!(table.column("city").unwrap().column_type, ColumnType::Text);
    }

    #[test]
    fn test_large_integers_parse_exactly() {
        let table = parse(b"id,v\n9007199254740993,1\n9007199254740992,1\n").unwrap();
        assert_eq!(table.column("id").unwrap().column_type, ColumnType::Integer);
        assert!(matches!(table.cell(0, 0), Some(Value::Integer(9_007_199_254_740_993))));
        assert!(matches!(table.cell(1, 0), Some(Value::Integer(9_007_199_254_740_992))));
        assert_ne!(table.records()[0], table.records()[1]);
    }

    #[test]
    fn test_missing_integer_becomes_float() {
        let table = parse(b"a\n1\n\n2\nNA\n").unwrap();
        assert_eq!(table.column("a").unwrap().column_type, ColumnType::Float);
        assert_eq!(table.cell(2, 0), Some(&Value::Missing));
    }

    #[test]
    fn test_mixed_column_is_text() {
        let table = parse(b"a\n1\nfoo\n").unwrap();
        assert_eq!(table.column("a").unwrap().column_type, ColumnType::Text);
        assert_eq!(table.cell(0, 0), Some(&Value::from("1")));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let table = parse(b"a,b\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(matches!(parse(b""), Err(SweeperError::EmptyData(_))));
    }

    #[test]
    fn test_too_many_fields_is_error() {
        let err = parse(b"a,b\n1,2\n3,4,5\n").unwrap_err();
        assert!(matches!(err, SweeperError::Parse { row: 2, .. }));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = parse(b"a,b\n1\n").unwrap();
        assert_eq!(table.cell(0, 1), Some(&Value::Missing));
    }

    #[test]
    fn test_duplicate_headers_are_renamed() {
        let table = parse(b"a,a,b,a\n1,2,3,4\n").unwrap();
        assert_eq!(table.column_names(), vec!["a", "a.1", "b", "a.2"]);
    }

    #[test]
    fn test_float_forms() {
        for value in ["1.5", ".5", "-2.", "1e3", "+4.2E-1", "inf", "-Infinity"] {
            assert_eq!(classify(value), CellKind::Float, "{}", value);
        }
        assert_eq!(classify(" 42 "), CellKind::Integer);
        assert_eq!(classify("1,5"), CellKind::Text);
        assert_eq!(classify("nan"), CellKind::Missing);
    }

    #[test]
    fn test_is_null_value() {
        assert!(is_null_value(""));
        assert!(is_null_value("NA"));
        assert!(is_null_value("N/A"));
        assert!(is_null_value("null"));
        assert!(is_null_value("NULL"));
        assert!(is_null_value("None"));
        assert!(!is_null_value("value"));
        assert!(!is_null_value("0"));
        assert!(!is_null_value("missing"));
        assert!(!is_null_value(" NA"));
        assert!(!is_null_value("  "));
    }

    #[test]
    fn test_padded_na_token_is_text() {
        let table = parse(b"a,b\n1, NA\n2,  \n3,x\n").unwrap();
        assert_eq!(table.column("b").unwrap().column_type, ColumnType::Text);
        assert_eq!(table.cell(0, 1), Some(&Value::from(" NA")));
        assert_eq!(table.cell(1, 1), Some(&Value::from("  ")));
    }

    #[test]
    fn test_parse_bytes_metadata() {
        let (table, metadata) = Parser::new().parse_bytes("data.csv", b"a\n1\n2\n").unwrap();
        assert_eq!(metadata.file, "data.csv");
        assert_eq!(metadata.row_count, table.row_count());
        assert_eq!(metadata.size_bytes, 6);
        assert!(metadata.hash.starts_with("sha256:"));
    }
}

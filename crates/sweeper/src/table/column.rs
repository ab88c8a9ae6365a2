//! Column metadata and type inference.

use serde::{Deserialize, Serialize};

use super::value::{Value, whole_i64};

/// Inferred data type for a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers with no missing values.
    Integer,
    /// Floating-point numbers, or whole numbers interrupted by missing values.
    Float,
    /// Anything that is not entirely numeric.
    #[default]
    Text,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Infer a column type from its cell values.
    ///
    /// A column whose cells are all missing is `Float`: it is numeric, but
    /// nothing can be computed over it. A column with no cells is `Text`.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut seen = false;
        let mut has_missing = false;
        let mut has_fraction = false;

        for value in values {
            seen = true;
            match value {
                Value::Missing => has_missing = true,
                Value::Integer(_) => {}
                Value::Number(n) => {
                    if whole_i64(*n).is_none() {
                        has_fraction = true;
                    }
                }
                Value::Text(_) => return ColumnType::Text,
            }
        }

        if !seen {
            ColumnType::Text
        } else if has_missing || has_fraction {
            ColumnType::Float
        } else {
            ColumnType::Integer
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Text => write!(f, "text"),
        }
    }
}

/// A named, typed table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name from the header row.
    pub name: String,
    /// Inferred data type.
    pub column_type: ColumnType,
}

impl Column {
    /// Create a column with a known type.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }

    /// Returns true if the column holds numbers.
    pub fn is_numeric(&self) -> bool {
        self.column_type.is_numeric()
    }
}

//! Cell values.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// A single cell of a [`Table`](super::Table).
///
/// Equality treats two `Missing` cells as equal and compares numbers by
/// value (`-0.0 == 0.0`, `Integer(2) == Number(2.0)`), so whole rows can be
/// compared and hashed when looking for duplicates. Integers are kept
/// exact: two integers that round to the same `f64` are still different.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// No recorded value.
    #[default]
    Missing,
    /// A whole number from an integer column.
    Integer(i64),
    /// A floating-point value.
    Number(f64),
    /// Any non-numeric content.
    Text(String),
}

impl Value {
    /// Returns true if the cell has no recorded value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Get the numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as an exact integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Number(n) => whole_i64(*n),
            _ => None,
        }
    }

    fn number_key(n: f64) -> u64 {
        if n == 0.0 {
            0.0f64.to_bits()
        } else if n.is_nan() {
            f64::NAN.to_bits()
        } else {
            n.to_bits()
        }
    }

    /// The `f64` an integer equals exactly, if there is one.
    fn exact_f64(i: i64) -> Option<f64> {
        let n = i as f64;
        (whole_i64(n) == Some(i)).then_some(n)
    }
}

/// Convert a whole, in-range float to `i64`.
pub(crate) fn whole_i64(n: f64) -> Option<i64> {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Missing, Value::Missing) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => Self::number_key(*a) == Self::number_key(*b),
            (Value::Integer(i), Value::Number(n)) | (Value::Number(n), Value::Integer(i)) => {
                Self::exact_f64(*i).is_some_and(|m| m == *n)
            }
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Integers with an exact float twin hash like that float.
        match self {
            Value::Missing => 0u8.hash(state),
            Value::Integer(i) => match Self::exact_f64(*i) {
                Some(n) => {
                    1u8.hash(state);
                    Self::number_key(n).hash(state);
                }
                None => {
                    2u8.hash(state);
                    i.hash(state);
                }
            },
            Value::Number(n) => {
                1u8.hash(state);
                Self::number_key(*n).hash(state);
            }
            Value::Text(s) => {
                3u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Missing => serializer.serialize_none(),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Missing)
    }
}

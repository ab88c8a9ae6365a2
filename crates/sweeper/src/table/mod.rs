//! Tabular data model: typed columns and cells.

mod column;
#[allow(clippy::module_inception)]
mod table;
mod value;

pub use column::{Column, ColumnType};
pub use table::{Row, Table};
pub use value::Value;
pub(crate) use value::whole_i64;

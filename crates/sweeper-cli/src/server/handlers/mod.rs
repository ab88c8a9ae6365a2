//! API request handlers.

mod clean;
mod data;
mod download;
mod options;

pub use clean::*;
pub use data::*;
pub use download::*;
pub use options::*;

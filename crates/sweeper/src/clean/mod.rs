//! Table cleaning: deduplication, missing-value handling and IQR outlier removal.

mod cleaner;
mod options;
mod report;

pub use cleaner::{TableCleaner, clean};
pub use options::{CleaningOptions, MissingStrategy};
pub use report::{CleaningReport, FillChange, OutlierBounds};

//! Output delivery: CSV export and previews.

mod preview;
mod writer;

pub use preview::{DEFAULT_PREVIEW_ROWS, TablePreview};
pub use writer::{
    CSV_MIME_TYPE, DOWNLOAD_FILE_NAME, format_cell, to_csv_bytes, write_csv, write_csv_file,
};

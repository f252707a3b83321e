//! Options dataset: CSV loading, row model, range filtering and bounds.

pub mod loader;
pub mod query;
pub mod record;

pub use loader::{DatasetLoader, REQUIRED_COLUMNS};
pub use query::{DatasetBounds, RangeFilter, ValueRange};
pub use record::{CellValue, ColumnType, Dataset, Record};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or aggregating the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Unavailable {
        /// Configured file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed delimited text.
    #[error("failed to parse dataset: {0}")]
    Malformed(#[from] csv::Error),

    /// The file has no header row.
    #[error("dataset has no header row")]
    MissingHeader,

    /// A required column is absent from the header.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A required column holds a value of the wrong type.
    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        /// 1-based data row number (header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// Offending cell text.
        value: String,
    },

    /// Aggregation requested over zero rows.
    #[error("dataset is empty")]
    Empty,
}

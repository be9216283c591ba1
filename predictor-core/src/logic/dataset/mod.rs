//! Dataset Module - Overview and visual analytics over the static dataset
//!
//! The CSV is read once at startup and kept in memory. Nothing here feeds the
//! prediction path.

pub mod loader;
pub mod summary;
pub mod visuals;


pub use loader::{Dataset, Preview};
pub use summary::{describe, ColumnSummary};
pub use visuals::{correlation_matrix, histogram, CorrelationMatrix, Histogram, KdePoint};

/// Dataset errors
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no header row")]
    MissingHeader,

    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("column is not numeric: {0}")]
    NotNumeric(String),

    #[error("column has no values: {0}")]
    NoData(String),
}

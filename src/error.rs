//! Error types for loading, filtering and exporting home value tables.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the rollup pipelines.
///
/// Malformed individual cells never show up here: unparseable numbers and
/// non-date column names are skipped where they are read.
#[derive(Debug, Error)]
pub enum RollupError {
    /// Input path does not carry the `.csv` extension.
    #[error("{path}: file must be of type CSV")]
    Format { path: PathBuf },

    /// Input file does not exist.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to open or create a file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read or write CSV rows.
    #[error("CSV error on {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to serialize a summary for logging.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Data that must be non-empty was empty.
    #[error("{what} is empty")]
    EmptyData { what: &'static str },
}

pub type Result<T> = std::result::Result<T, RollupError>;

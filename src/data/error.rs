//! Error types for data operations
//!
//! Every error raised while loading the dataset means the dataset is
//! unavailable for the session. Missing data for a particular selection is not
//! an error; see [`crate::report::Warning`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// Input file does not exist
    #[error("Dataset not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error (CSV parsing, frame construction, CSV writing)
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// A required column is absent from the header row
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// A data row could not be interpreted
    #[error("Invalid row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    /// More than one record for a (university, language, year) triple
    #[error("Duplicate record for {university} / {language} / {year}")]
    DuplicateRecord {
        university: String,
        language: String,
        year: i32,
    },

    /// Chart drawing failed
    #[error("Chart error: {0}")]
    Chart(String),
}

impl DataError {
    /// Whether this error means the dataset could not be loaded.
    ///
    /// These are fatal for the session; there is no degraded mode.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, DataError::Chart(_))
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

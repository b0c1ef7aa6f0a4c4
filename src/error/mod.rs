//! Error handling for the cleaning pipeline and dashboard views.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for pipeline and artifact operations
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error reading or writing delimited data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error reading a spreadsheet workbook
    #[error("Spreadsheet error in {path}: {message}")]
    Spreadsheet {
        /// Workbook path
        path: PathBuf,
        /// Underlying reader message
        message: String,
    },

    /// Workbook has no worksheet or no header row
    #[error("Workbook {0} contains no data")]
    EmptyWorkbook(PathBuf),

    /// Input file extension is not a supported format
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Required source columns are absent
    #[error("Schema error: missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        /// Normalized names of the absent columns
        columns: Vec<String>,
    },

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error building Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error converting records to or from Arrow
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_arrow::Error),

    /// Error reading JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AssistError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a spreadsheet error for the given workbook
    pub fn spreadsheet(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Spreadsheet {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, AssistError>;

/// Errors raised by a single dashboard view
///
/// These never abort the dashboard; they are rendered as an inline notice on
/// the affected page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The view needs a column the loaded artifact does not carry
    #[error("{view} is unavailable: {reason}")]
    Unavailable {
        /// Display name of the view
        view: &'static str,
        /// Human readable reason
        reason: String,
    },
}

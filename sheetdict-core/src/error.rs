//! Error types for dictionary loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or loading a metadata dictionary
#[derive(Debug, Error)]
pub enum DictError {
    /// No workbook matched the expected extension or file name
    #[error("No Excel files found in {}", folder.display())]
    NoFileFound { folder: PathBuf },

    #[error("Failed to read workbook {}: {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Sheet '{sheet}' not found in workbook")]
    MissingSheet { sheet: String },

    #[error("Column '{column}' not found in sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    /// The configured header row lies outside the sheet's data
    #[error("Header row {row} is outside sheet '{sheet}'")]
    HeaderRowOutOfRange { sheet: String, row: u32 },
}

/// Errors from a full report run: loading, or writing the report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Dict(#[from] DictError),
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DictError>;

//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an uploaded workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Workbook file not found.
    #[error("workbook not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Failed to open or decode the workbook.
    #[error("failed to read workbook {}: {message}", path.display())]
    Workbook { path: PathBuf, message: String },

    /// Workbook contains no worksheets.
    #[error("workbook has no worksheets: {}", path.display())]
    NoWorksheet { path: PathBuf },

    /// Worksheet has zero data rows at every header offset. This is the
    /// fatal empty-file condition, distinct from an unrecognized header
    /// shape (which falls back to offset 0).
    #[error("worksheet has no data rows")]
    EmptyInput,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

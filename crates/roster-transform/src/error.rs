//! Error types for roster transformation.

use thiserror::Error;

/// Errors that can occur during record transformation.
///
/// Only hard-required structure is fatal; malformed sibling entries,
/// unrecognized grade tokens, and unmapped columns degrade silently to
/// defaults.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A hard-required column was not found under any accepted spelling.
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

//! Error types for the export library.

use thiserror::Error;

/// Main error type for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Unrecognized scalar mode string.
    #[error("invalid scalar mode: {0}")]
    InvalidScalarMode(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

//! Error types.

use thiserror::Error;

/// Conversion errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Writer error: {0}")]
    Writer(String),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

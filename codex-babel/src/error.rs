//! Error types for format operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

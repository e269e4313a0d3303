//! Error types for topchi

use thiserror::Error;

/// Topchi error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration, rejected at module construction
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

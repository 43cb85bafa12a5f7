//! Error types for GarudaNav

use thiserror::Error;

/// GarudaNav error type
#[derive(Error, Debug)]
pub enum GarudaError {
    /// Remote service request failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact serialization failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Planning date missing, malformed, or out of the service window.
    #[error("invalid date: {0}")]
    Date(String),
}

impl From<toml::de::Error> for GarudaError {
    fn from(e: toml::de::Error) -> Self {
        GarudaError::Config(e.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GarudaError>;

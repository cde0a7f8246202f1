//! Error types shared across StressCam crates.

use std::path::PathBuf;

/// Top-level error type for StressCam operations.
#[derive(Debug, thiserror::Error)]
pub enum StresscamError {
    #[error("Detection error: {message}")]
    Detection { message: String },

    #[error("Observation stream error: {message}")]
    Stream { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using StresscamError.
pub type StresscamResult<T> = Result<T, StresscamError>;

impl StresscamError {
    pub fn detection(msg: impl Into<String>) -> Self {
        Self::Detection {
            message: msg.into(),
        }
    }

    pub fn stream(msg: impl Into<String>) -> Self {
        Self::Stream {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

//! Error types shared across ClipCap crates.

use std::path::PathBuf;

/// Top-level error type for ClipCap operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipcapError {
    #[error("Picker error: {message}")]
    Picker { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Transcode error: {message}")]
    Transcode { message: String },

    #[error("Probe error: {message}")]
    Probe { message: String },

    #[error("Captions error: {message}")]
    Captions { message: String },

    #[error("Subtitle error: {message}")]
    Subtitle { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ClipcapError.
pub type ClipcapResult<T> = Result<T, ClipcapError>;

impl ClipcapError {
    pub fn picker(msg: impl Into<String>) -> Self {
        Self::Picker {
            message: msg.into(),
        }
    }

    pub fn cache(msg: impl Into<String>) -> Self {
        Self::Cache {
            message: msg.into(),
        }
    }

    pub fn transcode(msg: impl Into<String>) -> Self {
        Self::Transcode {
            message: msg.into(),
        }
    }

    pub fn probe(msg: impl Into<String>) -> Self {
        Self::Probe {
            message: msg.into(),
        }
    }

    pub fn captions(msg: impl Into<String>) -> Self {
        Self::Captions {
            message: msg.into(),
        }
    }

    pub fn subtitle(msg: impl Into<String>) -> Self {
        Self::Subtitle {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}

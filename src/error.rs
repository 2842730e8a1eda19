//! Domain error types for folio
//!
//! Provides structured error types for different domains:
//! - `PrefsError` for the preference store
//! - `ConfigError` for the configuration file
//! - `FolioError` as the top-level error type
//!
//! The scroll controller has no error type; it absorbs bad input silently.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for folio
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Preference error: {0}")]
    Prefs(#[from] PrefsError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Errors related to the preference store
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Failed to read preferences at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write preferences at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed preferences file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Result type alias for FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Result type alias for PrefsError
pub type PrefsResult<T> = std::result::Result<T, PrefsError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<arboard::Error> for FolioError {
    fn from(err: arboard::Error) -> Self {
        FolioError::Clipboard(err.to_string())
    }
}

//! Configuration file support for folio.
//!
//! Configuration is loaded from `~/.config/folio/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Stored preferences (theme and language only)
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/folio/config.toml
//! cell_height_px = 18
//! cell_width_px = 9
//! wheel_delta_px = 120
//! frame_ms = 16
//! toast_ms = 2000
//! share_url = "https://example.org/en"
//! language = "ko"
//! dark_mode = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::locale::Language;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Virtual pixels per terminal row
    pub cell_height_px: f64,

    /// Virtual pixels per terminal column
    pub cell_width_px: f64,

    /// Virtual pixels per mouse wheel notch
    pub wheel_delta_px: f64,

    /// Frame interval; wheel input is applied at most once per frame
    pub frame_ms: u64,

    /// How long a toast stays on screen
    pub toast_ms: u64,

    /// Link copied by the share shortcut
    pub share_url: String,

    /// Language used when none is stored
    pub language: Option<Language>,

    /// Theme used when none is stored
    pub dark_mode: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_height_px: 16.0,
            cell_width_px: 8.0,
            wheel_delta_px: 100.0,
            frame_ms: 16,
            toast_ms: 2000,
            share_url: "https://byeonguk.example/".to_string(),
            language: None,
            dark_mode: None,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                crate::log::log(&format!("Config ignored: {}", e));
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
    }

    /// Replace non-positive or non-finite metrics with defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.cell_height_px.is_finite() && self.cell_height_px > 0.0) {
            self.cell_height_px = defaults.cell_height_px;
        }
        if !(self.cell_width_px.is_finite() && self.cell_width_px > 0.0) {
            self.cell_width_px = defaults.cell_width_px;
        }
        if !(self.wheel_delta_px.is_finite() && self.wheel_delta_px > 0.0) {
            self.wheel_delta_px = defaults.wheel_delta_px;
        }
        if self.frame_ms == 0 {
            self.frame_ms = defaults.frame_ms;
        }
        self
    }

    /// Viewport height in virtual pixels for a terminal of `rows` rows.
    pub fn viewport_height(&self, rows: u16) -> f64 {
        f64::from(rows) * self.cell_height_px
    }
}

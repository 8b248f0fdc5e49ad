//! # Configuration
//!
//! Loaded once at startup from an optional TOML file. Every field has a
//! default, so an empty file (or no file) is a valid configuration.
//!
//! ```toml
//! log_level = "info"
//!
//! [timing]
//! error_clear_ms = 1500
//! press_highlight_ms = 200
//! fade_in_ms = 300
//! fade_easing = "ease"
//!
//! [display]
//! width = 24
//!
//! [keys]
//! x = "mul"
//! c = "none"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tally_core::EngineConfig;
use tally_ui::{Easing, Keymap, UiError, WidgetConfig};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("invalid config file {path}: {source}")]
    Parse {
        /// Path that failed.
        path: PathBuf,
        /// Underlying parse error.
        source: toml::de::Error,
    },

    /// The `[keys]` table has a bad entry.
    #[error("invalid key binding: {0}")]
    Keymap(#[from] UiError),
}

/// Timing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long "Divide by 0" stays up before the reset (ms).
    pub error_clear_ms: u64,
    /// Button highlight duration (ms).
    pub press_highlight_ms: u64,
    /// Readout fade-in duration (ms).
    pub fade_in_ms: u64,
    /// Readout fade-in curve: `linear`, `ease` or `exponential-out`.
    pub fade_easing: Easing,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let engine = EngineConfig::default();
        let widget = WidgetConfig::default();
        Self {
            error_clear_ms: engine.error_clear_ms,
            press_highlight_ms: widget.press_highlight_ms,
            fade_in_ms: widget.fade_in_ms,
            fade_easing: widget.fade_easing,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Columns inside the frame border.
    pub width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { width: 24 }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: Option<String>,
    /// Timing settings.
    pub timing: TimingConfig,
    /// Display settings.
    pub display: DisplayConfig,
    /// Key name → command name overrides on top of the default keymap.
    pub keys: BTreeMap<String, String>,
}

impl TallyConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Engine settings.
    #[must_use]
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            error_clear_ms: self.timing.error_clear_ms,
        }
    }

    /// Widget settings.
    #[must_use]
    pub fn widget(&self) -> WidgetConfig {
        WidgetConfig {
            press_highlight_ms: self.timing.press_highlight_ms,
            fade_in_ms: self.timing.fade_in_ms,
            fade_easing: self.timing.fade_easing,
        }
    }

    /// Default keymap with the `[keys]` overrides applied.
    ///
    /// # Errors
    ///
    /// Fails on an unknown key or command name.
    pub fn keymap(&self) -> Result<Keymap, ConfigError> {
        let overrides = self.keys.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        Ok(Keymap::default().with_overrides(overrides)?)
    }
}

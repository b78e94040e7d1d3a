//! Shelfmark Configuration System
//!
//! Settings for the terminal frontend: log output, theme and refresh rate.
//! Library data is never written here; the book collection lives only for
//! the running session.
//!
//! # Architecture
//!
//! - **Sections**: each area defines its config as a type implementing `ConfigSection`
//! - **Graceful degradation**: a file from another version still loads; its
//!   problems come back as notices for the caller to log
//! - **Atomic writes**: config files are never left half-written
//!
//! # Example
//!
//! ```rust,no_run
//! use shelfmark_config::{Config, ConfigManager};
//!
//! let manager = ConfigManager::new().expect("Failed to initialize config");
//! let config = manager.load().unwrap_or_else(|e| {
//!     eprintln!("Config error: {}, using defaults", e);
//!     Config::default()
//! });
//!
//! println!("Theme: {}", config.ui.theme);
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

// Config sections
pub mod app_config;
mod ui_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::ConfigManager;
pub use persistence::Loaded;
pub use validation::{ConfigSection, Problems};

// Re-export config sections
pub use app_config::{AppConfig, LogLevel};
pub use ui_config::{ThemeName, UiConfig, TICK_RATE_MS};

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Terminal interface preferences
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.app.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.ui.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges this config with another, preferring values from `other`
    ///
    /// Used for override chains: defaults < file < env vars < CLI args
    pub fn merge(&mut self, other: Config) {
        self.app.merge(other.app);
        self.ui.merge(other.ui);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

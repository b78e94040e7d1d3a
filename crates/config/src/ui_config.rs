//! Terminal interface configuration section

use crate::validation::{ConfigSection, Problems, ValidationError};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

/// Accepted values for `ui.tick_rate_ms`
pub const TICK_RATE_MS: RangeInclusive<u64> = 50..=2000;

/// Colour theme names understood by the terminal frontend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    HighContrast,
    Nord,
}

impl ThemeName {
    /// Every theme, in cycling order
    pub const ALL: [ThemeName; 4] = [
        ThemeName::Dark,
        ThemeName::Light,
        ThemeName::HighContrast,
        ThemeName::Nord,
    ];
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Dark => write!(f, "dark"),
            ThemeName::Light => write!(f, "light"),
            ThemeName::HighContrast => write!(f, "high_contrast"),
            ThemeName::Nord => write!(f, "nord"),
        }
    }
}

impl FromStr for ThemeName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "dark" => Ok(ThemeName::Dark),
            "light" => Ok(ThemeName::Light),
            "high_contrast" => Ok(ThemeName::HighContrast),
            "nord" => Ok(ThemeName::Nord),
            _ => Err(ValidationError::new(
                "ui.theme",
                format!("'{}' is not one of dark, light, high_contrast, nord", s),
            )),
        }
    }
}

/// Terminal interface preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Colour theme used at startup
    pub theme: ThemeName,

    /// How long the event loop waits for input before redrawing, in milliseconds
    pub tick_rate_ms: u64,

    /// Open the key help overlay when the app starts
    pub show_help_on_start: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            tick_rate_ms: 250,
            show_help_on_start: false,
        }
    }
}

impl UiConfig {
    /// Event loop tick, pulled into [`TICK_RATE_MS`] if the setting is out of range
    pub fn tick_rate(&self) -> Duration {
        let ms = self
            .tick_rate_ms
            .clamp(*TICK_RATE_MS.start(), *TICK_RATE_MS.end());
        Duration::from_millis(ms)
    }
}

impl ConfigSection for UiConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut problems = Problems::new();
        problems.check_range("ui.tick_rate_ms", self.tick_rate_ms, TICK_RATE_MS);
        problems.finish()
    }

    fn merge(&mut self, other: Self) {
        self.theme = other.theme;
        self.tick_rate_ms = other.tick_rate_ms;
        self.show_help_on_start = other.show_help_on_start;
    }

    fn section_name(&self) -> &'static str {
        "ui"
    }
}

//! Configuration manager - main API for config operations

use crate::persistence::{ConfigPersistence, Loaded};
use crate::{Config, ConfigError, ConfigResult, LogLevel, ThemeName};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_LOG_FILE: &str = "shelfmark.log";

/// Main configuration manager
///
/// Resolves file locations, loads and saves the config, and applies
/// environment overrides.
pub struct ConfigManager {
    persistence: ConfigPersistence,
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager using the default config directory
    ///
    /// - Linux: `~/.config/shelfmark/`
    /// - macOS: `~/Library/Application Support/shelfmark/`
    /// - Windows: `%APPDATA%\shelfmark\`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Self::with_directory(config_dir)
    }

    /// Creates a config manager with a custom config directory
    pub fn with_directory(config_dir: PathBuf) -> ConfigResult<Self> {
        let persistence = ConfigPersistence::new(config_dir.join(CONFIG_FILE));

        Ok(Self {
            persistence,
            config_dir,
        })
    }

    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "shelfmark")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the config directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Resolves where log output should go for the given config
    pub fn log_path(&self, config: &Config) -> PathBuf {
        match config.app.log_file {
            Some(ref path) if path.is_absolute() => path.clone(),
            Some(ref path) => self.config_dir.join(path),
            None => self.config_dir.join(DEFAULT_LOG_FILE),
        }
    }

    /// Loads the configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file is corrupted, returns an error.
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Loads the configuration, falling back to defaults on any error
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Saves the configuration to file
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Writes a default config file if one doesn't exist
    ///
    /// Returns Ok(true) if a new file was created, Ok(false) if one already exists.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path().exists() {
            log::info!(
                "Config file already exists at {}",
                self.config_path().display()
            );
            return Ok(false);
        }

        self.save(&Config::default())?;
        Ok(true)
    }

    /// Overwrites the config file with default values
    pub fn reset(&self) -> ConfigResult<()> {
        self.save(&Config::default())
    }

    /// Validates the current configuration file
    ///
    /// Returns the validation messages; an empty list means valid.
    pub fn validate(&self) -> ConfigResult<Vec<String>> {
        let config = self.load()?;

        match config.validate() {
            Ok(()) => Ok(Vec::new()),
            Err(errors) => Ok(errors.iter().map(|e| e.to_string()).collect()),
        }
    }

    /// Loads the config and applies environment variable overrides
    ///
    /// Variables follow `SHELFMARK_SECTION_FIELD`:
    /// `SHELFMARK_APP_LOG_LEVEL`, `SHELFMARK_UI_THEME`, `SHELFMARK_UI_TICK_RATE_MS`.
    /// Unparsable values are logged and ignored.
    pub fn load_with_env_overrides(&self) -> ConfigResult<Config> {
        let loaded = self.read_with_env_overrides()?;
        loaded.log_notices();

        if let Err(problems) = loaded.config.validate() {
            log::warn!("{}", ConfigError::from(problems));
        }

        Ok(loaded.config)
    }

    /// Like [`load_with_env_overrides`](Self::load_with_env_overrides), but
    /// hands the notices back instead of logging them
    ///
    /// For callers that cannot log yet because the logger depends on the
    /// config being read.
    pub fn read_with_env_overrides(&self) -> ConfigResult<Loaded> {
        let mut loaded = self.persistence.read()?;
        let ignored = apply_env_overrides(&mut loaded.config, |name| std::env::var(name).ok());
        loaded.notices.extend(ignored);
        Ok(loaded)
    }
}

/// Applies `SHELFMARK_*` overrides read through `lookup`
///
/// Returns a notice for every variable that was set but could not be used.
fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut ignored = Vec::new();

    if let Some(level) = lookup("SHELFMARK_APP_LOG_LEVEL") {
        match level.parse::<LogLevel>() {
            Ok(level) => config.app.log_level = level,
            Err(e) => ignored.push(format!("Ignoring SHELFMARK_APP_LOG_LEVEL: {}", e)),
        }
    }

    if let Some(theme) = lookup("SHELFMARK_UI_THEME") {
        match theme.parse::<ThemeName>() {
            Ok(theme) => config.ui.theme = theme,
            Err(e) => ignored.push(format!("Ignoring SHELFMARK_UI_THEME: {}", e)),
        }
    }

    if let Some(rate) = lookup("SHELFMARK_UI_TICK_RATE_MS") {
        match rate.trim().parse::<u64>() {
            Ok(rate) => config.ui.tick_rate_ms = rate,
            Err(_) => ignored.push(format!(
                "Ignoring SHELFMARK_UI_TICK_RATE_MS: '{}' is not a number",
                rate
            )),
        }
    }

    ignored
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn setup_test_manager() -> (TempDir, ConfigManager) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf())
            .expect("Failed to create manager");
        (temp_dir, manager)
    }

    #[test]
    fn test_load_or_default_with_missing_file() {
        let (_temp_dir, manager) = setup_test_manager();
        let config = manager.load_or_default();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_with_corrupt_file() {
        let (_temp_dir, manager) = setup_test_manager();
        std::fs::write(manager.config_path(), "[ui\n").expect("Should write");
        assert_eq!(manager.load_or_default(), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, manager) = setup_test_manager();

        let mut config = Config::default();
        config.ui.theme = ThemeName::HighContrast;

        manager.save(&config).expect("Should save config");
        let loaded = manager.load().expect("Should load config");

        assert_eq!(loaded.ui.theme, ThemeName::HighContrast);
    }

    #[test]
    fn test_initialize_creates_file() {
        let (_temp_dir, manager) = setup_test_manager();

        let created = manager.initialize().expect("Should initialize");
        assert!(created);
        assert!(manager.config_path().exists());

        let created_again = manager.initialize().expect("Should initialize");
        assert!(!created_again);
    }

    #[test]
    fn test_reset() {
        let (_temp_dir, manager) = setup_test_manager();

        let mut config = Config::default();
        config.ui.show_help_on_start = true;
        manager.save(&config).expect("Should save");

        manager.reset().expect("Should reset");

        let loaded = manager.load().expect("Should load");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_validate_reports_file_problems() {
        let (_temp_dir, manager) = setup_test_manager();
        std::fs::write(manager.config_path(), "[ui]\ntick_rate_ms = 1\n").expect("Should write");

        let errors = manager.validate().expect("Should validate");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("ui.tick_rate_ms"));
    }

    #[test]
    fn test_config_file_path() {
        let (temp_dir, manager) = setup_test_manager();
        assert!(manager.config_path().ends_with("config.toml"));
        assert_eq!(manager.config_dir(), temp_dir.path());
    }

    #[test]
    fn test_log_path_resolution() {
        let (temp_dir, manager) = setup_test_manager();
        let mut config = Config::default();

        assert_eq!(manager.log_path(&config), temp_dir.path().join("shelfmark.log"));

        config.app.log_file = Some(PathBuf::from("logs/run.log"));
        assert_eq!(manager.log_path(&config), temp_dir.path().join("logs/run.log"));

        let absolute = temp_dir.path().join("elsewhere.log");
        config.app.log_file = Some(absolute.clone());
        assert_eq!(manager.log_path(&config), absolute);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SHELFMARK_APP_LOG_LEVEL", "debug"),
            ("SHELFMARK_UI_THEME", "light"),
            ("SHELFMARK_UI_TICK_RATE_MS", "100"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        let ignored = apply_env_overrides(&mut config, |name| vars.get(name).map(|v| v.to_string()));
        assert!(ignored.is_empty());

        assert_eq!(config.app.log_level, LogLevel::Debug);
        assert_eq!(config.ui.theme, ThemeName::Light);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_bad_env_overrides_are_ignored() {
        let mut config = Config::default();
        let ignored = apply_env_overrides(&mut config, |name| match name {
            "SHELFMARK_UI_THEME" => Some("plaid".to_string()),
            "SHELFMARK_UI_TICK_RATE_MS" => Some("fast".to_string()),
            _ => None,
        });

        assert_eq!(config, Config::default());
        assert_eq!(ignored.len(), 2);
        assert!(ignored[0].contains("SHELFMARK_UI_THEME"));
    }
}

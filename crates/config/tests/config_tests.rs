//! Integration tests for the configuration system

use shelfmark_config::{Config, ConfigError, ConfigManager, LogLevel, ThemeName};
use std::fs;
use tempfile::TempDir;

fn manager_in(temp_dir: &TempDir) -> ConfigManager {
    ConfigManager::with_directory(temp_dir.path().to_path_buf()).expect("Failed to create manager")
}

#[test]
fn test_complete_workflow() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let temp_dir = TempDir::new()?;
    let manager = manager_in(&temp_dir);
    assert!(!manager.config_path().exists());

    assert!(manager.initialize()?);
    assert!(manager.config_path().exists());
    assert_eq!(manager.load()?, Config::default());
    assert!(manager.validate()?.is_empty());

    let mut config = manager.load()?;
    config.ui.theme = ThemeName::Nord;
    config.app.log_level = LogLevel::Info;
    manager.save(&config)?;

    let reloaded = manager.load()?;
    assert_eq!(reloaded.ui.theme, ThemeName::Nord);
    assert_eq!(reloaded.app.log_level, LogLevel::Info);

    manager.reset()?;
    assert_eq!(manager.load()?, Config::default());
    Ok(())
}

#[test]
fn test_serialization_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::default();
    config.ui.show_help_on_start = true;

    let toml_string = toml::to_string(&config)?;
    let deserialized: Config = toml::from_str(&toml_string)?;
    assert_eq!(config, deserialized);
    Ok(())
}

#[test]
fn test_saved_file_is_readable_toml() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = manager_in(&temp_dir);
    manager.save(&Config::default())?;

    let contents = fs::read_to_string(manager.config_path())?;
    assert!(contents.contains("[app]"));
    assert!(contents.contains("[ui]"));
    assert!(contents.contains("theme = \"dark\""));
    Ok(())
}

#[test]
fn test_load_save_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = manager_in(&temp_dir);

    manager.save(&Config::default())?;
    let loaded = manager.load()?;
    manager.save(&loaded)?;
    assert_eq!(loaded, manager.load()?);
    Ok(())
}

#[test]
fn test_unknown_theme_is_a_parse_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = manager_in(&temp_dir);
    fs::write(manager.config_path(), "[ui]\ntheme = \"solarized\"\n")?;

    assert!(matches!(manager.load(), Err(ConfigError::Parse { .. })));
    assert_eq!(manager.load_or_default(), Config::default());
    Ok(())
}

#[test]
fn test_unknown_keys_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = manager_in(&temp_dir);
    fs::write(
        manager.config_path(),
        "version = 1\n[ui]\ntick_rate_ms = 400\nsparkles = true\n",
    )?;

    let config = manager.load()?;
    assert_eq!(config.ui.tick_rate_ms, 400);
    Ok(())
}

#[test]
fn test_env_overrides_apply_on_top_of_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = manager_in(&temp_dir);
    manager.save(&Config::default())?;

    std::env::set_var("SHELFMARK_UI_TICK_RATE_MS", "500");
    let config = manager.load_with_env_overrides();
    std::env::remove_var("SHELFMARK_UI_TICK_RATE_MS");

    assert_eq!(config?.ui.tick_rate_ms, 500);
    Ok(())
}

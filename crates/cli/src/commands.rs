// FILE: crates/cli/src/commands.rs

use anyhow::{bail, Context, Result};
use console::style;
use shelfmark_config::{Config, ConfigManager};
use shelfmark_tui::TuiApp;
use std::io::Write;

/// Opens the library in the terminal interface
pub fn run_tui(config: &Config) -> Result<()> {
    let mut app = TuiApp::with_config(config).context("Failed to start the terminal interface")?;
    app.run().context("Terminal interface stopped with an error")?;
    log::info!("Session ended");
    Ok(())
}

/// Writes a default config file unless one already exists
pub fn config_init(manager: &ConfigManager, out: &mut impl Write) -> Result<()> {
    let path = manager.config_path();
    let created = manager
        .initialize()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if created {
        writeln!(out, "{} Created {}", style("✓").green().bold(), path.display())?;
    } else {
        writeln!(out, "Config file already exists at {}", path.display())?;
    }
    Ok(())
}

/// Prints the effective configuration as TOML
pub fn config_show(config: &Config, out: &mut impl Write) -> Result<()> {
    let text = toml::to_string_pretty(config).context("Failed to serialize config")?;
    write!(out, "{}", text)?;
    Ok(())
}

pub fn config_path(manager: &ConfigManager, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", manager.config_path().display())?;
    Ok(())
}

/// Reports problems in the config file; fails when there are any
pub fn config_validate(manager: &ConfigManager, out: &mut impl Write) -> Result<()> {
    let path = manager.config_path();
    let problems = manager
        .validate()
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if problems.is_empty() {
        writeln!(out, "{} {} is valid", style("✓").green().bold(), path.display())?;
        return Ok(());
    }

    writeln!(out, "{} {}", style("✗").red().bold(), path.display())?;
    for problem in &problems {
        writeln!(out, "  - {}", problem)?;
    }
    bail!("{} problem(s) found in {}", problems.len(), path.display())
}

/// Overwrites the config file with defaults; the old file is kept as a backup
pub fn config_reset(manager: &ConfigManager, out: &mut impl Write) -> Result<()> {
    let path = manager.config_path();
    manager
        .reset()
        .with_context(|| format!("Failed to reset {}", path.display()))?;

    writeln!(out, "{} Reset {} to defaults", style("✓").green().bold(), path.display())?;
    Ok(())
}

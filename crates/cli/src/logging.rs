// crates/cli/src/logging.rs
//! Logger setup
//!
//! `RUST_LOG` still wins over the configured level when it is set.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use shelfmark_config::LogLevel;
use std::fs::{self, OpenOptions};
use std::path::Path;

pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::Off,
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

fn builder(level: LogLevel) -> Builder {
    Builder::from_env(Env::default().default_filter_or(level_filter(level).to_string()))
}

/// Logs to stderr; used by the commands that don't take over the terminal
pub fn init_stderr(level: LogLevel) {
    let _ = builder(level).target(Target::Stderr).try_init();
}

/// Appends log output to `path` so it stays out of the TUI
pub fn init_file(level: LogLevel, path: &Path) -> Result<()> {
    if level == LogLevel::Off && std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    builder(level)
        .target(Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .try_init()
        .context("Logger was already initialised")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(level_filter(LogLevel::Off), LevelFilter::Off);
        assert_eq!(level_filter(LogLevel::Warn), LevelFilter::Warn);
        assert_eq!(level_filter(LogLevel::Trace), LevelFilter::Trace);
        assert_eq!(level_filter(LogLevel::Warn).to_string(), "WARN");
    }
}

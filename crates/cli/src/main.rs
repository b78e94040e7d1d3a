// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use shelfmark_config::{Config, ConfigError, ConfigManager, Loaded, LogLevel, ThemeName};
use std::io;
use std::path::PathBuf;

mod commands;
mod logging;

fn build_cli() -> Command {
    Command::new("shelfmark")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Shelfmark Contributors")
        .about("Keep track of the books you own and the ones you have read")
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .value_name("DIR")
                .help("Directory holding config.toml and the log file")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .help("Color theme: dark, light, high_contrast or nord")
                .value_parser(|s: &str| s.parse::<ThemeName>().map_err(|e| e.to_string()))
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level: off, error, warn, info, debug or trace")
                .value_parser(|s: &str| s.parse::<LogLevel>().map_err(|e| e.to_string()))
                .global(true),
        )
        .subcommand(Command::new("run").about("Open the library (default)"))
        .subcommand(
            Command::new("config")
                .about("Inspect or change the configuration file")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("init").about("Write a default config file if none exists"))
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("path").about("Print where the config file lives"))
                .subcommand(Command::new("validate").about("Check the config file for problems"))
                .subcommand(Command::new("reset").about("Overwrite the config file with defaults")),
        )
}

/// What the command line asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Run,
    ConfigInit,
    ConfigShow,
    ConfigPath,
    ConfigValidate,
    ConfigReset,
}

/// Settings given on the command line; they win over file and environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Overrides {
    theme: Option<ThemeName>,
    log_level: Option<LogLevel>,
}

impl Overrides {
    fn apply(&self, config: &mut Config) {
        if let Some(theme) = self.theme {
            config.ui.theme = theme;
        }
        if let Some(level) = self.log_level {
            config.app.log_level = level;
        }
    }
}

#[derive(Debug)]
struct Invocation {
    config_dir: Option<PathBuf>,
    overrides: Overrides,
    action: Action,
}

impl Invocation {
    fn from_matches(matches: &ArgMatches) -> Self {
        let action = match matches.subcommand() {
            Some(("config", sub)) => match sub.subcommand_name() {
                Some("init") => Action::ConfigInit,
                Some("show") => Action::ConfigShow,
                Some("path") => Action::ConfigPath,
                Some("validate") => Action::ConfigValidate,
                _ => Action::ConfigReset,
            },
            _ => Action::Run,
        };

        Self {
            config_dir: matches.get_one::<PathBuf>("config-dir").cloned(),
            overrides: Overrides {
                theme: matches.get_one::<ThemeName>("theme").copied(),
                log_level: matches.get_one::<LogLevel>("log-level").copied(),
            },
            action,
        }
    }

    fn manager(&self) -> Result<ConfigManager> {
        let manager = match &self.config_dir {
            Some(dir) => ConfigManager::with_directory(dir.clone()),
            None => ConfigManager::new(),
        };
        manager.context("Failed to locate the config directory")
    }
}

/// Reads the settings `run` starts with and refuses out-of-range ones
///
/// Notices are handed back so they can be logged once the logger exists.
fn prepare_run(manager: &ConfigManager, overrides: &Overrides) -> Result<Loaded> {
    let path = manager.config_path();
    let mut loaded = manager
        .read_with_env_overrides()
        .with_context(|| format!("Failed to load {}", path.display()))?;
    overrides.apply(&mut loaded.config);

    loaded
        .config
        .validate()
        .map_err(ConfigError::from)
        .with_context(|| {
            format!(
                "Refusing to start; fix {} or run `shelfmark config reset`",
                path.display()
            )
        })?;

    Ok(loaded)
}

fn main() -> Result<()> {
    let invocation = Invocation::from_matches(&build_cli().get_matches());
    let manager = invocation.manager()?;

    if invocation.action == Action::Run {
        let loaded = prepare_run(&manager, &invocation.overrides)?;

        let log_path = manager.log_path(&loaded.config);
        logging::init_file(loaded.config.app.log_level, &log_path)?;
        log::info!("Starting shelfmark {}", env!("CARGO_PKG_VERSION"));
        loaded.log_notices();
        return commands::run_tui(&loaded.config);
    }

    logging::init_stderr(invocation.overrides.log_level.unwrap_or(LogLevel::Warn));
    let mut out = io::stdout().lock();

    match invocation.action {
        Action::ConfigInit => commands::config_init(&manager, &mut out),
        Action::ConfigShow => {
            let mut config = manager
                .load_with_env_overrides()
                .with_context(|| format!("Failed to load {}", manager.config_path().display()))?;
            invocation.overrides.apply(&mut config);
            commands::config_show(&config, &mut out)
        }
        Action::ConfigPath => commands::config_path(&manager, &mut out),
        Action::ConfigValidate => commands::config_validate(&manager, &mut out),
        Action::ConfigReset => commands::config_reset(&manager, &mut out),
        Action::Run => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Invocation {
        let matches = build_cli()
            .try_get_matches_from(args)
            .expect("arguments should parse");
        Invocation::from_matches(&matches)
    }

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_no_command_runs_the_library() {
        let invocation = parse(&["shelfmark"]);
        assert_eq!(invocation.action, Action::Run);
        assert_eq!(invocation.config_dir, None);
        assert_eq!(invocation.overrides, Overrides::default());
    }

    #[test]
    fn test_config_subcommands() {
        assert_eq!(parse(&["shelfmark", "config", "init"]).action, Action::ConfigInit);
        assert_eq!(parse(&["shelfmark", "config", "show"]).action, Action::ConfigShow);
        assert_eq!(parse(&["shelfmark", "config", "path"]).action, Action::ConfigPath);
        assert_eq!(
            parse(&["shelfmark", "config", "validate"]).action,
            Action::ConfigValidate
        );
        assert_eq!(parse(&["shelfmark", "config", "reset"]).action, Action::ConfigReset);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let invocation = parse(&[
            "shelfmark",
            "run",
            "--theme",
            "nord",
            "--log-level",
            "debug",
            "--config-dir",
            "/tmp/shelf",
        ]);

        assert_eq!(invocation.action, Action::Run);
        assert_eq!(invocation.config_dir, Some(PathBuf::from("/tmp/shelf")));
        assert_eq!(invocation.overrides.theme, Some(ThemeName::Nord));
        assert_eq!(invocation.overrides.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(build_cli()
            .try_get_matches_from(["shelfmark", "--theme", "sepia"])
            .is_err());
        assert!(build_cli()
            .try_get_matches_from(["shelfmark", "--log-level", "loud"])
            .is_err());
        assert!(build_cli()
            .try_get_matches_from(["shelfmark", "config"])
            .is_err());
    }

    #[test]
    fn test_overrides_win() {
        let mut config = Config::default();
        let overrides = Overrides {
            theme: Some(ThemeName::Light),
            log_level: Some(LogLevel::Trace),
        };
        overrides.apply(&mut config);

        assert_eq!(config.ui.theme, ThemeName::Light);
        assert_eq!(config.app.log_level, LogLevel::Trace);

        let untouched = Config::default();
        let mut config = Config::default();
        Overrides::default().apply(&mut config);
        assert_eq!(config, untouched);
    }

    fn manager_with_file(contents: &str) -> (ConfigManager, TempDir) {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_directory(dir.path().to_path_buf()).unwrap();
        fs::write(manager.config_path(), contents).unwrap();
        (manager, dir)
    }

    #[test]
    fn test_run_refuses_zero_tick_rate() {
        let (manager, _dir) = manager_with_file("[ui]\ntick_rate_ms = 0\n");

        let err = prepare_run(&manager, &Overrides::default()).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Refusing to start"));
        assert!(chain.contains("ui.tick_rate_ms"));
    }

    #[test]
    fn test_run_keeps_notices_for_the_logger() {
        let (manager, _dir) = manager_with_file("version = 7\n[ui]\ntheme = \"light\"\n");

        let loaded = prepare_run(&manager, &Overrides::default()).unwrap();
        assert_eq!(loaded.config.ui.theme, ThemeName::Light);
        assert!(loaded.notices.iter().any(|n| n.contains("version 7")));
    }

    #[test]
    fn test_run_applies_command_line_overrides() {
        let (manager, _dir) = manager_with_file("[ui]\ntheme = \"light\"\n");
        let overrides = Overrides {
            theme: Some(ThemeName::Nord),
            log_level: None,
        };

        let loaded = prepare_run(&manager, &overrides).unwrap();
        assert_eq!(loaded.config.ui.theme, ThemeName::Nord);
    }
}

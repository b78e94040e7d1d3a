//! Reading and writing `config.toml`
//!
//! A save never leaves a half-written file behind: the new text goes to a
//! sibling temp file which then replaces the target in one rename. Whatever
//! was there before is kept as `config.toml.backup`.

use crate::{Config, ConfigError, ConfigResult, CONFIG_VERSION};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A config read from disk, with anything worth telling the user about it
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub config: Config,
    /// Non-fatal findings, e.g. a file written by another format version
    pub notices: Vec<String>,
}

impl Loaded {
    fn clean(config: Config) -> Self {
        Self {
            config,
            notices: Vec::new(),
        }
    }

    /// Sends every notice to the `warn` log
    pub fn log_notices(&self) {
        for notice in &self.notices {
            log::warn!("{}", notice);
        }
    }
}

pub struct ConfigPersistence {
    path: PathBuf,
}

impl ConfigPersistence {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the file without logging anything
    ///
    /// No file means defaults. Out-of-range values are returned as they are;
    /// checking them is up to the caller.
    pub fn read(&self) -> ConfigResult<Loaded> {
        if !self.path.exists() {
            return Ok(Loaded::clean(Config::default()));
        }

        let text = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        if text.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: self.path.clone(),
            });
        }

        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        let mut loaded = Loaded::clean(config);
        if loaded.config.version != CONFIG_VERSION {
            loaded.notices.push(format!(
                "{} declares version {}; reading it as version {}",
                self.path.display(),
                loaded.config.version,
                CONFIG_VERSION
            ));
            loaded.config.version = CONFIG_VERSION;
        }
        Ok(loaded)
    }

    /// Reads the file, logging notices and any invalid settings
    pub fn load(&self) -> ConfigResult<Config> {
        let loaded = self.read()?;
        loaded.log_notices();
        if let Err(problems) = loaded.config.validate() {
            log::warn!("{}", ConfigError::from(problems));
        }
        Ok(loaded.config)
    }

    /// Writes `config`, refusing invalid settings before touching the disk
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        config.validate()?;
        let text = toml::to_string_pretty(config)?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

        if self.path.exists() {
            let backup = self.path.with_extension("toml.backup");
            fs::copy(&self.path, &backup).map_err(|source| ConfigError::Write {
                path: backup.clone(),
                source,
            })?;
            log::debug!("Previous config kept at {}", backup.display());
        }

        self.replace_with(dir, &text)?;
        log::info!("Config saved to {}", self.path.display());
        Ok(())
    }

    fn replace_with(&self, dir: &Path, text: &str) -> ConfigResult<()> {
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
        staged.write_all(text.as_bytes()).map_err(write_err)?;
        staged
            .persist(&self.path)
            .map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

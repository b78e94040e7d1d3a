//! Error types for the configuration system

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while locating, reading or writing `config.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but holds nothing but whitespace
    #[error("{path} is empty")]
    Empty { path: PathBuf },

    #[error("{path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot encode config as TOML: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One or more settings are out of range; nothing was written
    #[error("invalid settings: {}", join_problems(.0))]
    Invalid(Vec<ValidationError>),

    /// The platform gave no per-user config directory
    #[error("no config directory is available for this user")]
    NoConfigDir,
}

impl From<Vec<ValidationError>> for ConfigError {
    fn from(problems: Vec<ValidationError>) -> Self {
        ConfigError::Invalid(problems)
    }
}

fn join_problems(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single bad setting, named by its `section.field` path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

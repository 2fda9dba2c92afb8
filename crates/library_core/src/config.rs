//! Archive configuration.
//!
//! # Responsibility
//! - Describe ID sequence seeds and logging setup in one serde model.
//! - Validate settings before they reach the logger or the archive.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - A validated config has a known log level and an absolute log dir (or none).

use crate::logging::{default_log_level, normalize_level};
use crate::model::ids::DEFAULT_FIRST_ID;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Configuration parse/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    UnsupportedLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid library config: {err}"),
            Self::UnsupportedLogLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(path) => {
                write!(f, "log_dir must be an absolute path, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Logger settings consumed by `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Directory for rolling log files; `None` leaves logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Top-level archive configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// First ID issued to a book copy.
    pub first_copy_id: u32,
    /// First ID issued to a reader.
    pub first_reader_id: u32,
    pub logging: LoggingConfig,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            first_copy_id: DEFAULT_FIRST_ID,
            first_reader_id: DEFAULT_FIRST_ID,
            logging: LoggingConfig::default(),
        }
    }
}

impl LibraryConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the logging section.
    ///
    /// # Errors
    /// - `UnsupportedLogLevel` for anything outside `trace|debug|info|warn|error`.
    /// - `RelativeLogDir` when `log_dir` is set but not absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if normalize_level(&self.logging.level).is_none() {
            return Err(ConfigError::UnsupportedLogLevel(
                self.logging.level.trim().to_string(),
            ));
        }
        if let Some(dir) = &self.logging.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.clone()));
            }
        }
        Ok(())
    }
}

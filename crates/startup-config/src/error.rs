use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures while locating, reading, or checking the host config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot determine working directory for {default_dir}: {source}")]
    WorkingDir {
        default_dir: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid logging.{field} '{value}': {reason} {location}")]
    InvalidLogging {
        field: &'static str,
        value: String,
        reason: &'static str,
        location: ErrorLocation,
    },
}

impl ConfigError {
    /// Creates InvalidLogging error at caller location.
    #[track_caller]
    pub fn invalid_logging(
        field: &'static str,
        value: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidLogging {
            field,
            value: value.into(),
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;

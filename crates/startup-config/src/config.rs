use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig,
};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads from the directory named by `STARTUP_CONFIG_DIR`, else `./.startup/`,
    /// with `STARTUP_LOG_*` overrides from the process environment.
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let mut config = Self::read_dir(&Self::config_dir()?)?;
        config
            .logging
            .apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Reads `config.toml` from `dir`, creating the directory on first run.
    /// A missing file yields defaults; no environment overrides are applied.
    pub fn read_dir(dir: &Path) -> ConfigErrorResult<Self> {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(CONFIG_FILENAME);
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        std::env::current_dir()
            .map(|cwd| cwd.join(DEFAULT_CONFIG_DIR))
            .map_err(|source| ConfigError::WorkingDir {
                default_dir: DEFAULT_CONFIG_DIR,
                source,
            })
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.logging.validate()
    }

    pub fn log_summary(&self) {
        info!(
            "Startup config: log level {}, log dir '{}', colored {}",
            self.logging.level, self.logging.dir, self.logging.colored
        );
    }
}

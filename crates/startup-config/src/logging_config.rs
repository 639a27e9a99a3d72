use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, LOG_COLORED_ENV,
    LOG_DIR_ENV, LOG_LEVEL_ENV, LogLevel,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log directory, relative to the host's data directory
    pub dir: String,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

impl LoggingConfig {
    /// Applies `STARTUP_LOG_*` overrides read through `lookup`.
    ///
    /// `STARTUP_LOG_COLORED` is true only for `true` or `1`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.level = LogLevel::parse_lenient(&level);
        }
        if let Some(dir) = lookup(LOG_DIR_ENV) {
            self.dir = dir;
        }
        if let Some(colored) = lookup(LOG_COLORED_ENV) {
            self.colored = matches!(colored.trim(), "true" | "1");
        }
    }

    /// The log directory must stay inside the data directory.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::invalid_logging("dir", &self.dir, "cannot be empty"));
        }

        let dir = Path::new(&self.dir);
        if dir.is_absolute() || dir.components().any(|c| c.as_os_str() == "..") {
            return Err(ConfigError::invalid_logging(
                "dir",
                &self.dir,
                "must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}

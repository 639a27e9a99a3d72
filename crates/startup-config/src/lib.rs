//! Host configuration for the startup loader: where logs go and how loud
//! they are. Read from `config.toml`, then overridden by `STARTUP_*` vars.

mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const CONFIG_DIR_ENV: &str = "STARTUP_CONFIG_DIR";
pub const LOG_LEVEL_ENV: &str = "STARTUP_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "STARTUP_LOG_DIR";
pub const LOG_COLORED_ENV: &str = "STARTUP_LOG_COLORED";

const DEFAULT_CONFIG_DIR: &str = ".startup";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "logs";
const DEFAULT_LOG_COLORED: bool = true;

//! Logging setup with file rotation.

use std::path::{Path, PathBuf};

use startup_config::{Config, LoggingConfig};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

const LOG_FILE_PREFIX: &str = "startup";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

/// Host entry point: loads the startup config, validates it, installs the
/// subscriber under `data_dir`, and logs the effective settings.
///
/// Returns the loaded config so the host can reuse it.
pub fn init_logging(data_dir: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    config.validate()?;

    setup_logging(&config.logging, data_dir)?;
    config.log_summary();

    Ok(config)
}

/// Setup logging with console and rotating file output.
///
/// # Log Layers
/// - Console: Human-readable, colored per config
/// - File: plain text, daily rotation, 7-day retention
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn setup_logging(
    config: &LoggingConfig,
    data_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let logs_dir = data_dir.join(&config.dir);
    std::fs::create_dir_all(&logs_dir)?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(config.colored);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(MAX_LOG_FILES)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(&logs_dir)?;

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Get path to current log file (for diagnostics export).
///
/// The appender rolls over on UTC dates.
pub fn current_log_path(config: &LoggingConfig, data_dir: &Path) -> PathBuf {
    let today = chrono::Utc::now().format("%Y-%m-%d");
    data_dir
        .join(&config.dir)
        .join(format!("{LOG_FILE_PREFIX}.{today}.{LOG_FILE_SUFFIX}"))
}

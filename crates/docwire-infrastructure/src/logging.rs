//! Structured logging with tracing
//!
//! Configures the global subscriber from [`LoggingConfig`]: text or JSON
//! output on stderr, optionally mirrored to a daily-rolled file.

use crate::constants::{LOG_ENV_VAR, LOG_FILE_STEM};
use crate::error_ext::ErrorContext;
use docwire_domain::error::{Error, Result};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// `DOCWIRE_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new(LOG_FILE_STEM)),
        )
    });

    // stdout carries command output
    let registry = Registry::default().with(filter);
    let initialized = if config.json_format {
        let console = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(console).with(file).try_init()
        } else {
            registry.with(console).try_init()
        }
    } else {
        let console = fmt::layer().with_writer(std::io::stderr).with_target(true);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(console).with(file).try_init()
        } else {
            registry.with(console).try_init()
        }
    };
    initialized.context("Failed to initialize logging")?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log the configuration file that was loaded
pub fn log_config_loaded(config_path: &std::path::Path) {
    info!("Configuration loaded from {}", config_path.display());
}

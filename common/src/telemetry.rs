// Telemetry module for structured logging
// Console output is always active; file sinks are gated by LOG_TO_FILE.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Settings;

const LOG_FILE: &str = "app.log";
const ERROR_LOG_FILE: &str = "error.log";

/// Initialize the tracing subscriber.
///
/// Sets up a colorized, leveled console layer and, when `log_to_file` is
/// enabled, two daily-rotating file sinks under `log_dir`: a general log at
/// the configured level and an error-only log. The returned guards flush the
/// non-blocking file writers and must be held for the process lifetime.
///
/// # Errors
/// Returns an error if the log level does not parse or if a subscriber is
/// already installed.
pub fn init_logging(config: &Settings) -> Result<Vec<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_ansi(true)
        .with_target(true)
        .with_filter(env_filter(&config.log_level)?);

    let mut guards = Vec::new();
    let registry = tracing_subscriber::registry().with(console_layer);

    if config.log_to_file {
        let (app_writer, app_guard) = tracing_appender::non_blocking(
            tracing_appender::rolling::daily(&config.log_dir, LOG_FILE),
        );
        guards.push(app_guard);
        let app_layer = fmt::layer()
            .with_writer(app_writer)
            .with_ansi(false)
            .with_filter(env_filter(&config.log_level)?);

        let (error_writer, error_guard) = tracing_appender::non_blocking(
            tracing_appender::rolling::daily(&config.log_dir, ERROR_LOG_FILE),
        );
        guards.push(error_guard);
        let error_layer = fmt::layer()
            .with_writer(error_writer)
            .with_ansi(false)
            .with_filter(LevelFilter::ERROR);

        registry
            .with(app_layer)
            .with(error_layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;
    } else {
        registry
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;
    }

    tracing::info!(
        log_level = %config.log_level,
        log_to_file = config.log_to_file,
        "Logging initialized"
    );

    Ok(guards)
}

/// RUST_LOG takes precedence over the configured level.
fn env_filter(log_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.to_lowercase()))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_configured_levels() {
        for level in ["INFO", "debug", "TRACE", "warn", "error"] {
            assert!(env_filter(level).is_ok(), "level {level} should parse");
        }
    }

    #[test]
    fn test_init_logging_console_only() {
        let config = Settings {
            log_to_file: false,
            ..Settings::default()
        };
        // Succeeds, or fails because another test already installed a
        // subscriber in this process.
        let result = init_logging(&config);
        assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn test_init_logging_with_file_sinks() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Settings {
            log_to_file: true,
            log_dir: dir.path().to_string_lossy().into_owned(),
            ..Settings::default()
        };
        if let Ok(guards) = init_logging(&config) {
            assert_eq!(guards.len(), 2);
        }
    }
}

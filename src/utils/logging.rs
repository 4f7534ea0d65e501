//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the WheelQuiz application.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{WheelQuizError, Result};

/// Initialize logging based on configuration
///
/// When a log directory is configured the returned guard must be kept alive
/// for the lifetime of the application, otherwise buffered lines are lost.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| WheelQuizError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stdout)
            .boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "wheelquiz.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| WheelQuizError::Config(format!("Failed to install log subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log language bundle events
pub fn log_language_event(lang: &str, event: &str, details: Option<&str>) {
    info!(
        lang = lang,
        event = event,
        details = details,
        "Language event occurred"
    );
}

/// Log a language that could not be loaded
pub fn log_language_unsupported(lang: &str, fallback: &str, reason: &str) {
    warn!(
        lang = lang,
        fallback = fallback,
        reason = reason,
        "Language '{}' not yet supported",
        lang
    );
}

/// Log store mutations with structured data
pub fn log_store_action(action: &str, from: usize, to: usize) {
    debug!(
        action = action,
        from = from,
        to = to,
        "Store action performed"
    );
}

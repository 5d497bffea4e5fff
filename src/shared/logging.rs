//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use crate::config::settings::LoggingConfig;
use crate::domain::AppConfig;
use crate::shared::error::{AppError, ValidationError};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration.
    ///
    /// `RUST_LOG` takes precedence over `logging.level` when it is set.
    pub fn initialize(logging: &LoggingConfig) -> crate::Result<()> {
        let filter = Self::build_filter(&logging.level)?;

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(logging.ansi);

        let result = if logging.format == "compact" {
            tracing::subscriber::set_global_default(builder.compact().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Logging(format!("Failed to initialize logging: {}", e)))
    }

    fn build_filter(level: &str) -> crate::Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }

        EnvFilter::try_new(level)
            .map_err(|e| AppError::Logging(format!("Invalid log level '{}': {}", level, e)))
    }

    /// Log the snapshot accepted at startup
    pub fn log_config_accepted(config: &AppConfig) {
        info!(
            name = %config.name,
            max_users = config.max_users,
            features = ?config.features,
            "Application configuration validated"
        );
    }

    /// Log a startup rule violation
    pub fn log_config_rejected(err: &ValidationError) {
        error!(
            field = err.field(),
            error = %err,
            "Application configuration rejected"
        );
    }

    /// Log a configuration read
    pub fn log_config_served(config: &AppConfig) {
        debug!(name = %config.name, "Serving configuration snapshot");
    }
}

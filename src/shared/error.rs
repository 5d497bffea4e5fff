//! Error handling module
//!
//! This module provides centralized error handling for the application.

use thiserror::Error;

/// Startup rule violations for the `app` configuration section.
///
/// Variants are ordered the same way the rules are evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("application name must not be empty")]
    EmptyName,

    #[error("minimum number of users must be greater than zero")]
    MaxUsersTooLow { value: i64 },

    #[error("feature list must not be empty")]
    EmptyFeatures,
}

impl ValidationError {
    /// Configuration key the violated rule applies to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "app.name",
            ValidationError::MaxUsersTooLow { .. } => "app.maxUsers",
            ValidationError::EmptyFeatures => "app.features",
        }
    }
}

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("invalid settings: {}", err))
    }
}

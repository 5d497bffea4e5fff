//! Configuration service - validates application settings at startup and
//! serves them read-only over HTTP.
//!
//! The `app` section of the settings is checked once by [`ConfigStore`]; a
//! violation aborts startup. Afterwards `GET /api/config` returns the frozen
//! snapshot.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use crate::application::ConfigStore;
pub use crate::config::Settings;
pub use crate::domain::AppConfig;
pub use crate::infrastructure::HttpServer;
pub use crate::shared::error::{AppError, AppResult, ValidationError};

/// Application result type
pub type Result<T> = std::result::Result<T, AppError>;

//! Configuration management module
//!
//! This module handles all configuration concerns including loading,
//! validation, and providing access to application settings.

pub mod settings;
pub mod sources;
pub mod validation;

pub use settings::{LoggingConfig, RawAppConfig, ServerConfig, Settings};
pub use sources::LowercaseKeys;
pub use validation::ConfigValidator;

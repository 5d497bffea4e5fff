//! Service settings
//!
//! This module contains the configuration document read at startup and the
//! logic that layers it from a file and the process environment.

use crate::config::sources::{deserialize_feature_list, LowercaseKeys};
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::net::IpAddr;
use tracing::debug;
use validator::Validate;

/// Prefix for environment overrides, e.g. `CONFIGPROP__APP__NAME`
pub const ENV_PREFIX: &str = "CONFIGPROP";

/// Environment variable naming an explicit settings file
pub const CONFIG_FILE_ENV: &str = "CONFIGPROP_CONFIG";

/// Settings file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "Conf";

/// Complete configuration document
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,

    /// Unvalidated application section
    #[serde(default)]
    pub app: RawAppConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Server address to bind to
    pub bind_address: IpAddr,

    /// Server port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (full, compact)
    #[validate(custom(function = validate_log_format))]
    pub format: String,

    /// Colored output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "full".to_string(),
            ansi: false,
        }
    }
}

fn validate_log_format(format: &str) -> Result<(), validator::ValidationError> {
    match format {
        "full" | "compact" => Ok(()),
        _ => Err(validator::ValidationError::new("log_format")
            .with_message("expected `full` or `compact`".into())),
    }
}

/// The `app` section exactly as the source provided it.
///
/// Absent keys fall back to empty values so that they fail the same rule an
/// explicitly empty value would. Keys arrive lower-cased, so the file's
/// `maxUsers` and the environment's `MAXUSERS` both land on `maxusers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAppConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "maxusers")]
    pub max_users: i64,

    #[serde(default, deserialize_with = "deserialize_feature_list")]
    pub features: Vec<String>,
}

impl Settings {
    /// Load settings from the settings file and environment variables
    pub fn load() -> crate::Result<Self> {
        let file = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => File::with_name(&path).required(true),
            Err(_) => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .add_source(LowercaseKeys(file))
            .add_source(Self::environment());

        Self::from_builder(builder)
    }

    /// Environment source.
    ///
    /// Values stay strings until deserialization so text fields are never
    /// reinterpreted; `app.features` is split on commas by the field itself.
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).separator("__")
    }

    /// Build, deserialize and structurally check settings from any sources.
    ///
    /// Rules on the `app` section are not applied here.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> crate::Result<Self> {
        let settings: Settings = builder
            .build()
            .map_err(|e| crate::AppError::Config(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| crate::AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        settings.validate()?;

        debug!(
            address = %settings.server_address(),
            level = %settings.logging.level,
            "Settings loaded"
        );

        Ok(settings)
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}

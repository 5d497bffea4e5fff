//! Domain layer
//!
//! Business entities with no dependency on transport or configuration sources.

pub mod app_config;

pub use app_config::AppConfig;

//! Application layer
//!
//! This module coordinates domain values for the infrastructure layer.

pub mod services;

pub use services::ConfigStore;

//! HTTP routes module
//!
//! This module contains all HTTP route configurations.

pub mod builder;
pub mod config;

pub use builder::RouteBuilder;
pub use config::ConfigRoutes;

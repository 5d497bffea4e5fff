//! HTTP route handlers module
//!
//! This module contains the handlers behind each route.

pub mod config;

pub use config::handle_config_request;

//! Infrastructure layer - External concerns and adapters
//!
//! This module contains transport concerns, currently the HTTP surface.

pub mod http;

pub use http::HttpServer;

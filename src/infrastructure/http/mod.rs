//! HTTP infrastructure module
//!
//! This module contains HTTP-related concerns: server, routes, handlers and
//! the filters that inject shared state.

pub mod handlers;
pub mod routes;
pub mod server;
pub mod utils;

pub use handlers::*;
pub use server::HttpServer;
pub use utils::*;

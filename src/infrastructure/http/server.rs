//! HTTP server implementation
//!
//! This module wires the configuration store into the routes and serves them.
//! The store is initialized before any socket is bound, so a rejected
//! configuration never reaches a serving state.

use crate::{
    application::ConfigStore,
    config::Settings,
    infrastructure::http::routes::RouteBuilder,
    shared::error::{AppError, AppResult},
};
use std::net::SocketAddr;
use tracing::{info, instrument};
use warp::{Filter, Reply};

/// HTTP server for the configuration endpoint
pub struct HttpServer {
    settings: Settings,
    store: ConfigStore,
}

impl HttpServer {
    /// Validate the application section and create a server instance
    pub fn new(settings: Settings) -> AppResult<Self> {
        let store = ConfigStore::initialize(settings.app.clone())?;

        Ok(Self { settings, store })
    }

    /// Get a reference to the settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve the configured bind address
    pub fn address(&self) -> AppResult<SocketAddr> {
        self.settings
            .server_address()
            .parse()
            .map_err(|e| AppError::Server(format!("Invalid server address: {}", e)))
    }

    /// Run the HTTP server
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr = self.address()?;
        info!("Starting HTTP server on {}", addr);

        warp::serve(self.routes()).run(addr).await;

        Ok(())
    }

    /// Create the application routes
    pub fn routes(&self) -> impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone {
        RouteBuilder::build_routes(self.store.clone())
    }
}

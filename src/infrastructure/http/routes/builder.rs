//! Route builder module
//!
//! This module contains the main route builder that orchestrates the creation
//! of all application routes.

use crate::{application::ConfigStore, infrastructure::http::routes::ConfigRoutes};
use warp::Filter;

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes, each request wrapped in a tracing span
    pub fn build_routes(
        store: ConfigStore,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        ConfigRoutes::create_config_route(store).with(warp::trace::request())
    }
}

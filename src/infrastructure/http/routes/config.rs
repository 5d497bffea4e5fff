//! Configuration routes module
//!
//! This module contains the read-only configuration route.

use crate::{
    application::ConfigStore,
    infrastructure::http::{handlers::handle_config_request, utils::with_config_store},
};
use warp::Filter;

/// Configuration routes
pub struct ConfigRoutes;

impl ConfigRoutes {
    /// Create the `GET /api/config` route
    pub fn create_config_route(
        store: ConfigStore,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("api" / "config")
            .and(warp::get())
            .and(with_config_store(store))
            .and_then(handle_config_request)
    }
}

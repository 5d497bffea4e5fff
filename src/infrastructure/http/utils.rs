//! HTTP utilities - Common helper functions
//!
//! This module contains filters that inject shared state into routes.

use crate::application::ConfigStore;
use warp::Filter;

/// Helper function to inject the configuration store into route
pub fn with_config_store(
    store: ConfigStore,
) -> impl Filter<Extract = (ConfigStore,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || store.clone())
}

//! Configuration handler module
//!
//! This module contains the read-only configuration endpoint handler.

use crate::{application::ConfigStore, shared::LoggingUtils};
use warp::Reply;

/// Handle configuration retrieval requests
pub async fn handle_config_request(
    store: ConfigStore,
) -> Result<impl Reply, warp::reject::Rejection> {
    let config = store.get();
    LoggingUtils::log_config_served(&config);

    Ok(warp::reply::json(config.as_ref()))
}

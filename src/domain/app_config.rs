//! Application configuration snapshot
//!
//! The validated, read-only view of the `app` section. Values of this type are
//! only produced by [`ConfigValidator`](crate::config::ConfigValidator), so
//! holding one means every startup rule has already passed.

use serde::Serialize;

/// Validated application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Display name, never blank
    pub name: String,

    /// Upper bound on concurrent users, at least 1
    pub max_users: u64,

    /// Enabled feature flags in configured order, never empty
    pub features: Vec<String>,
}

//! Configuration store service
//!
//! Holds the validated application configuration for the lifetime of the
//! process. The snapshot is frozen at construction and shared read-only, so
//! concurrent readers need no locking.

use crate::config::{ConfigValidator, RawAppConfig};
use crate::domain::AppConfig;
use crate::shared::{LoggingUtils, ValidationError};
use std::sync::Arc;

/// Owner of the frozen configuration snapshot
#[derive(Debug, Clone)]
pub struct ConfigStore {
    snapshot: Arc<AppConfig>,
}

impl ConfigStore {
    /// Validate the raw section and freeze it.
    ///
    /// A violation is logged and returned; the caller is expected to abort
    /// startup.
    pub fn initialize(raw: RawAppConfig) -> Result<Self, ValidationError> {
        match ConfigValidator::validate(raw) {
            Ok(config) => {
                LoggingUtils::log_config_accepted(&config);
                Ok(Self {
                    snapshot: Arc::new(config),
                })
            }
            Err(e) => {
                LoggingUtils::log_config_rejected(&e);
                Err(e)
            }
        }
    }

    /// Get the frozen snapshot
    pub fn get(&self) -> Arc<AppConfig> {
        Arc::clone(&self.snapshot)
    }
}

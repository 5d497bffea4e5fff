//! Configuration validation module
//!
//! This module applies the startup rules for the `app` section. Rules run in a
//! fixed order and the first violation is reported.

use crate::config::settings::RawAppConfig;
use crate::domain::AppConfig;
use crate::shared::error::ValidationError;

/// Validator for the application section
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the raw section and freeze it into an [`AppConfig`]
    pub fn validate(raw: RawAppConfig) -> Result<AppConfig, ValidationError> {
        Self::validate_name(&raw.name)?;
        let max_users = Self::validate_max_users(raw.max_users)?;
        Self::validate_features(&raw.features)?;

        Ok(AppConfig {
            name: raw.name,
            max_users,
            features: raw.features,
        })
    }

    /// Name must contain something other than whitespace
    fn validate_name(name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }

    fn validate_max_users(max_users: i64) -> Result<u64, ValidationError> {
        match u64::try_from(max_users) {
            Ok(value) if value >= 1 => Ok(value),
            _ => Err(ValidationError::MaxUsersTooLow { value: max_users }),
        }
    }

    fn validate_features(features: &[String]) -> Result<(), ValidationError> {
        if features.is_empty() {
            return Err(ValidationError::EmptyFeatures);
        }
        Ok(())
    }
}

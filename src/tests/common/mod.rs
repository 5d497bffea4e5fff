//! Common test fixtures
//!
//! Builders for the configuration inputs used across test modules.

/// Fixture builders
pub mod fixtures {
    use crate::config::{RawAppConfig, Settings};

    /// Build a raw `app` section
    pub fn raw_app(name: &str, max_users: i64, features: &[&str]) -> RawAppConfig {
        RawAppConfig {
            name: name.to_string(),
            max_users,
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Default settings carrying the given `app` section
    pub fn settings_with(app: RawAppConfig) -> Settings {
        Settings {
            app,
            ..Settings::default()
        }
    }

    /// Settings for the reference `Demo` application
    pub fn demo_settings() -> Settings {
        settings_with(raw_app("Demo", 10, &["a", "b"]))
    }
}

/// Shared assertions
pub mod assertions {
    use crate::shared::error::{AppError, ValidationError};

    /// Assert that startup failed on the given rule
    pub fn assert_rejected_on(err: &AppError, field: &str) {
        match err {
            AppError::Validation(e) => assert_eq!(e.field(), field, "unexpected rule: {}", e),
            other => panic!("expected validation error, got {}", other),
        }
    }

    /// Assert that the error carries the given message
    pub fn assert_message(err: &ValidationError, message: &str) {
        assert_eq!(err.to_string(), message);
    }
}

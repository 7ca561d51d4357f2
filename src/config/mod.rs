//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `COMM_TOOLKIT` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use comm_toolkit::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod features;
mod report;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use report::ReportDefaults;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has sensible defaults; an empty environment yields a
/// valid configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Report generation defaults
    #[serde(default)]
    pub report: ReportDefaults,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COMM_TOOLKIT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `COMM_TOOLKIT__REPORT__DEFAULT_TIME_RANGE=month`
    /// - `COMM_TOOLKIT__FEATURES__ENABLE_REPORTS=false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMM_TOOLKIT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.report.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.features.enable_reports);
    }

    #[test]
    fn deserializes_nested_sections() {
        let json = r#"{
            "report": { "default_time_range": "year" },
            "features": { "enable_timeline": false }
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.report.default_time_range,
            crate::domain::analysis::TimeRange::Year
        );
        assert!(!config.features.enable_timeline);
    }
}

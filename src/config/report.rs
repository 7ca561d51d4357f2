//! Report defaults configuration

use serde::Deserialize;

use crate::domain::analysis::TimeRange;
use crate::ports::ReportFormat;

use super::error::ValidationError;

/// Defaults applied when a report is requested without explicit options
#[derive(Debug, Clone, Deserialize)]
pub struct ReportDefaults {
    /// Default lookback window for generated reports
    #[serde(default)]
    pub default_time_range: TimeRange,

    /// Default rendering format for exported reports
    #[serde(default)]
    pub default_format: ReportFormat,

    /// Directory rendered reports are written into, when file output is
    /// wanted
    #[serde(default)]
    pub export_dir: Option<String>,
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            default_time_range: TimeRange::Week,
            default_format: ReportFormat::Json,
            export_dir: None,
        }
    }
}

impl ReportDefaults {
    /// Validate the report defaults
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_time_range == TimeRange::Custom {
            return Err(ValidationError::CustomDefaultRange);
        }
        if let Some(dir) = &self.export_dir {
            if dir.trim().is_empty() {
                return Err(ValidationError::EmptyExportDir);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_weekly_json() {
        let defaults = ReportDefaults::default();
        assert_eq!(defaults.default_time_range, TimeRange::Week);
        assert_eq!(defaults.default_format, ReportFormat::Json);
        assert!(defaults.export_dir.is_none());
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn custom_default_range_fails_validation() {
        let defaults = ReportDefaults {
            default_time_range: TimeRange::Custom,
            ..Default::default()
        };
        assert!(matches!(
            defaults.validate(),
            Err(ValidationError::CustomDefaultRange)
        ));
    }

    #[test]
    fn blank_export_dir_fails_validation() {
        let defaults = ReportDefaults {
            export_dir: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            defaults.validate(),
            Err(ValidationError::EmptyExportDir)
        ));
    }

    #[test]
    fn deserializes_snake_case_values() {
        let json = r#"{ "default_time_range": "month", "default_format": "csv" }"#;
        let defaults: ReportDefaults = serde_json::from_str(json).unwrap();
        assert_eq!(defaults.default_time_range, TimeRange::Month);
        assert_eq!(defaults.default_format, ReportFormat::Csv);
    }
}

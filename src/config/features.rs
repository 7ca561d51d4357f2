//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling dashboard panels
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Enable the analytics and performance views
    #[serde(default = "default_true")]
    pub enable_analytics: bool,

    /// Enable report generation and export
    #[serde(default = "default_true")]
    pub enable_reports: bool,

    /// Enable the merged timeline view
    #[serde(default = "default_true")]
    pub enable_timeline: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_analytics: true,
            enable_reports: true,
            enable_timeline: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_analytics);
        assert!(flags.enable_reports);
        assert!(flags.enable_timeline);
    }

    #[test]
    fn deserializes_partial_overrides() {
        let json = r#"{ "enable_reports": false }"#;
        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(flags.enable_analytics);
        assert!(!flags.enable_reports);
        assert!(flags.enable_timeline);
    }
}

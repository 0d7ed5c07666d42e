use anyhow::Context;
use serde::Deserialize;
use shared::DashboardConfig;

const DASHBOARD_YAML: &str = include_str!("../../dashboard.yaml");

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrontendConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self { log_level: default_log_level(), dashboard: DashboardConfig::default() }
    }
}

impl FrontendConfig {
    /// The YAML bundled with the app at build time
    pub fn bundled() -> anyhow::Result<Self> {
        Self::from_yaml(DASHBOARD_YAML)
    }

    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let config: FrontendConfig =
            serde_yaml::from_str(yaml).context("dashboard.yaml is not valid YAML")?;
        config.dashboard.validate().context("dashboard.yaml has invalid values")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_loads() {
        let config = FrontendConfig::bundled().unwrap();
        assert_eq!(config.dashboard.notice_display_ms, 4000);
        assert_eq!(config.dashboard.user.first_name(), "Julie");
        assert!(config.log_level.starts_with("info"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = FrontendConfig::from_yaml("log_level: debug\n").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.dashboard, DashboardConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = FrontendConfig::from_yaml("dashboard:\n  notice_display_ms: 0\n");
        assert!(result.is_err());
    }
}

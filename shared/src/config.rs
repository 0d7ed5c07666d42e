//! Dashboard configuration.
//!
//! Defaults match the Premier dashboard; a YAML document can override any
//! subset of fields.

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::models::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Shown instead of every balance while balances are hidden
    pub balance_mask: String,
    /// How long a notice stays on screen before it removes itself
    pub notice_display_ms: u64,
    /// Smallest amount accepted by the transfer/payment/goal forms
    pub min_amount: f64,
    pub amount_step: f64,
    pub account_number_max_length: usize,
    pub sort_code_max_length: usize,
    pub user: UserProfile,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            balance_mask: "••••••".to_string(),
            notice_display_ms: 4000,
            min_amount: 0.01,
            amount_step: 0.01,
            account_number_max_length: 8,
            sort_code_max_length: 8,
            user: UserProfile::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_yaml_str(yaml: &str) -> DashboardResult<Self> {
        let config: DashboardConfig =
            serde_yaml::from_str(yaml).map_err(|e| DashboardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.balance_mask.is_empty() {
            return Err(DashboardError::Config("balance_mask cannot be empty".to_string()));
        }
        if self.notice_display_ms == 0 {
            return Err(DashboardError::Config("notice_display_ms must be positive".to_string()));
        }
        if !(self.min_amount > 0.0) {
            return Err(DashboardError::Config("min_amount must be positive".to_string()));
        }
        Ok(())
    }
}

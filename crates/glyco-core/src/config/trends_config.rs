use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::Granularity;

/// Trend aggregation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendsConfig {
    /// Delta (mg/dL) at or above which a spike counts as high.
    pub high_spike_threshold: i64,
    /// Period size used when the caller does not pick one.
    pub default_granularity: Granularity,
}

impl TrendsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.high_spike_threshold <= 0 {
            return Err(ConfigError::invalid(
                "trends.high_spike_threshold",
                format!("must be positive, got {}", self.high_spike_threshold),
            ));
        }
        Ok(())
    }
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            high_spike_threshold: defaults::DEFAULT_HIGH_SPIKE_THRESHOLD,
            default_granularity: defaults::DEFAULT_GRANULARITY,
        }
    }
}

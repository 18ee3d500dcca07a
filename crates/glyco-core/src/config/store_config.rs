use serde::{Deserialize, Serialize};

use super::defaults;

/// Reading store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Reject a reading whose timestamp and phase match an existing one.
    pub reject_duplicate_readings: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            reject_duplicate_readings: defaults::DEFAULT_REJECT_DUPLICATE_READINGS,
        }
    }
}

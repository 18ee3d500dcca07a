use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Spike pairing configuration.
///
/// The asymmetric windows follow the usual protocol: the "before" reading is
/// taken just prior to eating, the "after" reading somewhere in the 1–3h
/// postprandial window. Protocols differ, so both are configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    /// How far before a meal a "before" reading may be (minutes).
    pub window_before_minutes: i64,
    /// How far after a meal an "after" reading may be (minutes).
    pub window_after_minutes: i64,
    /// Relative distance from the before-value that counts as recovered.
    pub recovery_tolerance: f64,
}

impl PairingConfig {
    /// Saturates at `Duration::MAX` when the minutes do not fit a `Duration`.
    pub fn window_before(&self) -> Duration {
        Duration::try_minutes(self.window_before_minutes).unwrap_or(Duration::MAX)
    }

    /// Saturates at `Duration::MAX` when the minutes do not fit a `Duration`.
    pub fn window_after(&self) -> Duration {
        Duration::try_minutes(self.window_after_minutes).unwrap_or(Duration::MAX)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, minutes) in [
            ("pairing.window_before_minutes", self.window_before_minutes),
            ("pairing.window_after_minutes", self.window_after_minutes),
        ] {
            if minutes <= 0 {
                return Err(ConfigError::invalid(field, format!("must be positive, got {minutes}")));
            }
            if minutes > defaults::MAX_WINDOW_MINUTES {
                return Err(ConfigError::invalid(
                    field,
                    format!(
                        "must be at most {} minutes, got {minutes}",
                        defaults::MAX_WINDOW_MINUTES
                    ),
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.recovery_tolerance) {
            return Err(ConfigError::invalid(
                "pairing.recovery_tolerance",
                format!("must be within [0, 1], got {}", self.recovery_tolerance),
            ));
        }
        Ok(())
    }
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            window_before_minutes: defaults::DEFAULT_WINDOW_BEFORE_MINUTES,
            window_after_minutes: defaults::DEFAULT_WINDOW_AFTER_MINUTES,
            recovery_tolerance: defaults::DEFAULT_RECOVERY_TOLERANCE,
        }
    }
}

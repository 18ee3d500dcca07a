use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::ActivityLevel;

/// Composite risk scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Weight of the normalized mean spike magnitude.
    pub spike_weight: f64,
    /// Weight of the high-spike ratio.
    pub high_spike_ratio_weight: f64,
    /// Weight of the genetic risk score. Redistributed when no profile is given.
    pub genetic_weight: f64,
    /// Mean magnitude (mg/dL) that normalizes to 1.0.
    pub mean_delta_ceiling: f64,
    /// Tier boundaries on the composite score.
    pub tiers: TierThresholds,
    /// Genetic risk multiplier per activity level.
    pub activity_multipliers: ActivityMultipliers,
}

/// Lower bounds of each tier above `Low`. Must be strictly ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub moderate: f64,
    pub high: f64,
    pub severe: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            moderate: defaults::DEFAULT_TIER_MODERATE,
            high: defaults::DEFAULT_TIER_HIGH,
            severe: defaults::DEFAULT_TIER_SEVERE,
        }
    }
}

/// Factor applied to the genetic risk score for each activity level. The
/// product is clamped to [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityMultipliers {
    pub sedentary: f64,
    pub light: f64,
    pub moderate: f64,
    pub active: f64,
}

impl ActivityMultipliers {
    pub fn for_level(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
        }
    }
}

impl Default for ActivityMultipliers {
    fn default() -> Self {
        Self {
            sedentary: defaults::DEFAULT_SEDENTARY_MULTIPLIER,
            light: defaults::DEFAULT_LIGHT_MULTIPLIER,
            moderate: defaults::DEFAULT_MODERATE_MULTIPLIER,
            active: defaults::DEFAULT_ACTIVE_MULTIPLIER,
        }
    }
}

impl RiskConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, weight) in [
            ("risk.spike_weight", self.spike_weight),
            ("risk.high_spike_ratio_weight", self.high_spike_ratio_weight),
            ("risk.genetic_weight", self.genetic_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a non-negative number, got {weight}"),
                ));
            }
        }
        if self.spike_weight + self.high_spike_ratio_weight <= 0.0 {
            return Err(ConfigError::invalid(
                "risk.spike_weight",
                "spike and high-spike-ratio weights cannot both be zero",
            ));
        }
        if !self.mean_delta_ceiling.is_finite() || self.mean_delta_ceiling <= 0.0 {
            return Err(ConfigError::invalid(
                "risk.mean_delta_ceiling",
                format!("must be positive, got {}", self.mean_delta_ceiling),
            ));
        }

        let m = &self.activity_multipliers;
        for (field, multiplier) in [
            ("risk.activity_multipliers.sedentary", m.sedentary),
            ("risk.activity_multipliers.light", m.light),
            ("risk.activity_multipliers.moderate", m.moderate),
            ("risk.activity_multipliers.active", m.active),
        ] {
            if !multiplier.is_finite() || multiplier < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a non-negative number, got {multiplier}"),
                ));
            }
        }

        let t = &self.tiers;
        let ascending = 0.0 < t.moderate && t.moderate < t.high && t.high < t.severe;
        if !ascending || t.severe > 1.0 {
            return Err(ConfigError::invalid(
                "risk.tiers",
                format!(
                    "thresholds must be strictly ascending within (0, 1], got {}/{}/{}",
                    t.moderate, t.high, t.severe
                ),
            ));
        }
        Ok(())
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            spike_weight: defaults::DEFAULT_SPIKE_WEIGHT,
            high_spike_ratio_weight: defaults::DEFAULT_HIGH_SPIKE_RATIO_WEIGHT,
            genetic_weight: defaults::DEFAULT_GENETIC_WEIGHT,
            mean_delta_ceiling: defaults::DEFAULT_MEAN_DELTA_CEILING,
            tiers: TierThresholds::default(),
            activity_multipliers: ActivityMultipliers::default(),
        }
    }
}

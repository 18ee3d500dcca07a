use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Recommendation generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Macro grams are rounded to the nearest multiple of this when bucketing.
    pub bucket_grams: u32,
    /// Buckets with fewer samples are left out of both lists.
    pub min_samples: usize,
    /// Maximum number of patterns in each of the avoid and prefer lists.
    pub top_n: usize,
    /// Activity-adjusted genetic risk above which the report suggests
    /// professional advice.
    pub genetic_advice_threshold: f64,
}

impl RecommendationConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket_grams == 0 {
            return Err(ConfigError::invalid(
                "recommendation.bucket_grams",
                "must be at least 1",
            ));
        }
        if self.min_samples == 0 {
            return Err(ConfigError::invalid(
                "recommendation.min_samples",
                "must be at least 1",
            ));
        }
        if self.top_n == 0 {
            return Err(ConfigError::invalid("recommendation.top_n", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.genetic_advice_threshold) {
            return Err(ConfigError::invalid(
                "recommendation.genetic_advice_threshold",
                format!("must be within [0, 1], got {}", self.genetic_advice_threshold),
            ));
        }
        Ok(())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            bucket_grams: defaults::DEFAULT_BUCKET_GRAMS,
            min_samples: defaults::DEFAULT_MIN_BUCKET_SAMPLES,
            top_n: defaults::DEFAULT_TOP_N,
            genetic_advice_threshold: defaults::DEFAULT_GENETIC_ADVICE_THRESHOLD,
        }
    }
}

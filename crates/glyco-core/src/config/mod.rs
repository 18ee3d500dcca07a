pub mod defaults;
mod observability_config;
mod pairing_config;
mod recommendation_config;
mod risk_config;
mod store_config;
mod trends_config;

pub use observability_config::ObservabilityConfig;
pub use pairing_config::PairingConfig;
pub use recommendation_config::RecommendationConfig;
pub use risk_config::{ActivityMultipliers, RiskConfig, TierThresholds};
pub use store_config::StoreConfig;
pub use trends_config::TrendsConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, GlycoResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlycoConfig {
    pub store: StoreConfig,
    pub pairing: PairingConfig,
    pub trends: TrendsConfig,
    pub risk: RiskConfig,
    pub recommendation: RecommendationConfig,
    pub observability: ObservabilityConfig,
}

impl GlycoConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(toml_str: &str) -> GlycoResult<Self> {
        let config: GlycoConfig = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section for values the engines cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pairing.validate()?;
        self.trends.validate()?;
        self.risk.validate()?;
        self.recommendation.validate()?;
        Ok(())
    }
}

//! # glyco-core
//!
//! Foundation crate for the Glyco spike-detection and risk-correlation engine.
//! Defines all entities, errors, config, defaults, and the storage trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GlycoConfig;
pub use errors::{GlycoError, GlycoResult};
pub use models::{
    ActivityLevel, GeneticProfile, GlucoseReading, Granularity, Macronutrients, Meal, Phase, RiskAssessment,
    RiskTier, SpikeEvent, StoredReading, TrendSummary,
};
pub use traits::IReadingStore;

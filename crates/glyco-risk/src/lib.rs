//! # glyco-risk
//!
//! Composite risk scoring for trend periods and single meals.
//!
//! ```text
//! composite = normalize(mean_magnitude, 0, ceiling) × w_spike
//!           + high_spike_ratio                      × w_ratio
//!           + genetic risk × activity multiplier    × w_genetic
//! ```
//!
//! The activity-adjusted genetic term is clamped to [0, 1].
//!
//! Without a genetic profile the genetic weight is spread over the other
//! two in proportion to their size.

pub mod engine;
pub mod formula;
pub mod tiers;

pub use engine::RiskScorer;
pub use formula::{
    activity_multiplier, adjusted_genetic_risk, compute, compute_breakdown, effective_weights,
    normalize, EffectiveWeights,
};
pub use tiers::classify;

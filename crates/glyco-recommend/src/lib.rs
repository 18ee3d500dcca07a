//! # glyco-recommend
//!
//! Buckets meals by rounded macro composition and ranks the buckets by the
//! spikes they caused. Also composes tier-level dietary guidance.

pub mod bucket;
pub mod engine;
pub mod guidance;

pub use bucket::signature_for;
pub use engine::RecommendationEngine;

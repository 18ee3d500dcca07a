//! # glyco-trends
//!
//! Groups spike events into UTC calendar periods and reduces each period to
//! a [`TrendSummary`](glyco_core::models::TrendSummary).

pub mod engine;
pub mod period;
pub mod stats;

pub use engine::TrendAggregator;
pub use period::period_bounds;

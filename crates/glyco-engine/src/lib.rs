//! # glyco-engine
//!
//! Wires the pipeline stages together. One analysis run takes a store
//! snapshot, pairs spikes, aggregates them per period, scores the periods
//! and meals, and ranks meal patterns into a single [`AnalysisReport`].

pub mod engine;
pub mod report;

pub use engine::AnalysisEngine;
pub use report::AnalysisReport;

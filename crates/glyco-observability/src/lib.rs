//! # glyco-observability
//!
//! Subscriber installation and the structured events every pipeline stage
//! reports through.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};

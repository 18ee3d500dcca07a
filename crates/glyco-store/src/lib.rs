//! # glyco-store
//!
//! Holds meals and glucose readings ordered by timestamp.
//! Lookups are range queries over per-phase B-tree indexes.
//! Analysis runs against copy-on-write snapshots, so concurrent ingestion
//! never leaks into a run that is already in progress.

pub mod ingest;
pub mod snapshot;
pub mod store;

pub use ingest::{IngestReport, RawBatch, RawGeneticProfile, RawMeal, RawReading};
pub use snapshot::{SharedReadingStore, StoreSnapshot};
pub use store::ReadingStore;

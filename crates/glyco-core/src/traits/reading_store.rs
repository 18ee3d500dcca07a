use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::models::{Meal, Phase, StoredReading};

/// Read access to recorded meals and readings.
///
/// The spike pairer is the only stage that reads storage, and it does so
/// through this trait, so it can run against a live store or a snapshot.
pub trait IReadingStore: Send + Sync {
    /// Readings of `phase` within `max_window` of `timestamp` (inclusive),
    /// nearest first. Equal distances go to the earlier timestamp, then to
    /// the earlier insertion.
    fn readings_near(
        &self,
        timestamp: DateTime<Utc>,
        phase: Phase,
        max_window: Duration,
    ) -> Vec<StoredReading>;

    /// All meals ordered by timestamp, then insertion.
    fn meals(&self) -> Vec<Arc<Meal>>;
}

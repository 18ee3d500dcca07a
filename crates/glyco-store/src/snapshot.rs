//! Read-only views for analysis runs.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};

use glyco_core::config::StoreConfig;
use glyco_core::errors::{GlycoError, GlycoResult};
use glyco_core::models::{GlucoseReading, Meal, Phase, StoredReading};
use glyco_core::traits::IReadingStore;

use crate::ingest::{IngestReport, RawBatch};
use crate::store::{ReadingStore, StoreData};

/// Immutable view of a store at one point in time.
///
/// Taking one is O(1). Later writes to the store copy the data instead of
/// touching what the snapshot sees.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    data: Arc<StoreData>,
}

impl StoreSnapshot {
    pub(crate) fn new(data: Arc<StoreData>) -> Self {
        Self { data }
    }

    /// Insertion counter at the time the snapshot was taken.
    pub fn version(&self) -> u64 {
        self.data.version()
    }

    pub fn meal_count(&self) -> usize {
        self.data.meal_count()
    }

    pub fn reading_count(&self) -> usize {
        self.data.reading_count()
    }

    pub fn is_empty(&self) -> bool {
        self.meal_count() == 0 && self.reading_count() == 0
    }
}

impl IReadingStore for StoreSnapshot {
    fn readings_near(
        &self,
        timestamp: DateTime<Utc>,
        phase: Phase,
        max_window: Duration,
    ) -> Vec<StoredReading> {
        self.data.readings_near(timestamp, phase, max_window)
    }

    fn meals(&self) -> Vec<Arc<Meal>> {
        self.data.meals()
    }
}

/// A store that accepts ingestion from several threads while analysis runs
/// against snapshots.
#[derive(Debug, Default)]
pub struct SharedReadingStore {
    inner: RwLock<ReadingStore>,
}

impl SharedReadingStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            inner: RwLock::new(ReadingStore::new(config)),
        }
    }

    pub fn add_meal(&self, meal: Meal) -> GlycoResult<Arc<Meal>> {
        self.write()?.add_meal(meal)
    }

    pub fn add_reading(&self, reading: GlucoseReading) -> GlycoResult<StoredReading> {
        self.write()?.add_reading(reading)
    }

    pub fn ingest(&self, batch: RawBatch) -> GlycoResult<IngestReport> {
        self.write()?.ingest(batch)
    }

    /// The read lock is held only long enough to clone an `Arc`.
    pub fn snapshot(&self) -> GlycoResult<StoreSnapshot> {
        let guard = self.inner.read().map_err(|e| GlycoError::StoreUnavailable {
            reason: e.to_string(),
        })?;
        Ok(guard.snapshot())
    }

    fn write(&self) -> GlycoResult<std::sync::RwLockWriteGuard<'_, ReadingStore>> {
        self.inner.write().map_err(|e| GlycoError::StoreUnavailable {
            reason: e.to_string(),
        })
    }
}

impl From<ReadingStore> for SharedReadingStore {
    fn from(store: ReadingStore) -> Self {
        Self {
            inner: RwLock::new(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use glyco_core::models::Macronutrients;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 2, h, 0, 0).unwrap()
    }

    #[test]
    fn test_snapshot_does_not_see_later_writes() {
        let mut store = ReadingStore::default();
        store
            .add_meal(Meal::new("m1", "Toast", Macronutrients::new(30.0, 5.0, 5.0), at(8)).unwrap())
            .unwrap();
        let snap = store.snapshot();

        store
            .add_meal(Meal::new("m2", "Pasta", Macronutrients::new(70.0, 12.0, 9.0), at(13)).unwrap())
            .unwrap();
        store
            .add_reading(GlucoseReading::new(100, Phase::Before, at(12)).unwrap())
            .unwrap();

        assert_eq!(snap.meal_count(), 1);
        assert_eq!(snap.meals().len(), 1);
        assert!(snap
            .readings_near(at(12), Phase::Before, Duration::hours(1))
            .is_empty());
        assert_eq!(store.meal_count(), 2);
        assert!(snap.version() < store.snapshot().version());
    }

    #[test]
    fn test_shared_store_concurrent_ingestion() {
        let shared = Arc::new(SharedReadingStore::default());
        let handles: Vec<_> = (0..4u32)
            .map(|i| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    let ts = at(6 + i);
                    shared
                        .add_reading(GlucoseReading::new(90 + i64::from(i), Phase::Before, ts).unwrap())
                        .unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let snap = shared.snapshot().unwrap();
        assert_eq!(snap.reading_count(), 4);
    }
}

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use glyco_core::config::StoreConfig;
use glyco_core::errors::{DuplicateError, GlycoError, GlycoResult};
use glyco_core::models::{
    ActivityLevel, GeneticProfile, GlucoseReading, Meal, Phase, StoredReading,
};
use glyco_core::traits::IReadingStore;

use crate::ingest::{IngestReport, RawBatch};
use crate::snapshot::StoreSnapshot;

/// Index key: timestamp first, insertion sequence second.
type TimeKey = (DateTime<Utc>, u64);

/// The store's contents. Shared between the store and its snapshots and
/// cloned only when the store is written while a snapshot is alive.
#[derive(Debug, Clone, Default)]
pub(crate) struct StoreData {
    before: BTreeMap<TimeKey, Arc<GlucoseReading>>,
    after: BTreeMap<TimeKey, Arc<GlucoseReading>>,
    meals: BTreeMap<TimeKey, Arc<Meal>>,
    meal_ids: HashSet<String>,
    next_seq: u64,
}

impl StoreData {
    fn index(&self, phase: Phase) -> &BTreeMap<TimeKey, Arc<GlucoseReading>> {
        match phase {
            Phase::Before => &self.before,
            Phase::After => &self.after,
        }
    }

    fn index_mut(&mut self, phase: Phase) -> &mut BTreeMap<TimeKey, Arc<GlucoseReading>> {
        match phase {
            Phase::Before => &mut self.before,
            Phase::After => &mut self.after,
        }
    }

    fn has_reading_at(&self, timestamp: DateTime<Utc>, phase: Phase) -> bool {
        self.index(phase)
            .range((timestamp, 0)..=(timestamp, u64::MAX))
            .next()
            .is_some()
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    pub(crate) fn version(&self) -> u64 {
        self.next_seq
    }

    pub(crate) fn meal_count(&self) -> usize {
        self.meals.len()
    }

    pub(crate) fn reading_count(&self) -> usize {
        self.before.len() + self.after.len()
    }

    pub(crate) fn readings_near(
        &self,
        timestamp: DateTime<Utc>,
        phase: Phase,
        max_window: Duration,
    ) -> Vec<StoredReading> {
        if max_window < Duration::zero() {
            return Vec::new();
        }
        let lo = timestamp
            .checked_sub_signed(max_window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let hi = timestamp
            .checked_add_signed(max_window)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut found: Vec<StoredReading> = self
            .index(phase)
            .range((lo, 0)..=(hi, u64::MAX))
            .map(|(&(_, seq), reading)| StoredReading {
                seq,
                reading: Arc::clone(reading),
            })
            .collect();

        // Stable sort: the range is already in (timestamp, seq) order, so
        // equal distances keep the earlier timestamp, then the first insert.
        found.sort_by_key(|r| (r.timestamp() - timestamp).abs());
        found
    }

    pub(crate) fn meals(&self) -> Vec<Arc<Meal>> {
        self.meals.values().cloned().collect()
    }
}

/// In-memory reading store.
///
/// Writes go through `Arc::make_mut`, so a snapshot taken earlier keeps
/// seeing exactly the records that existed when it was taken.
#[derive(Debug, Clone, Default)]
pub struct ReadingStore {
    data: Arc<StoreData>,
    config: StoreConfig,
}

impl ReadingStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            data: Arc::new(StoreData::default()),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Record a meal. Meal ids are unique within a store.
    pub fn add_meal(&mut self, meal: Meal) -> GlycoResult<Arc<Meal>> {
        if self.data.meal_ids.contains(meal.id()) {
            tracing::warn!(meal_id = %meal.id(), "duplicate meal rejected");
            return Err(DuplicateError::Meal {
                id: meal.id().to_string(),
            }
            .into());
        }

        let data = Arc::make_mut(&mut self.data);
        let seq = data.take_seq();
        let meal = Arc::new(meal);
        data.meal_ids.insert(meal.id().to_string());
        data.meals.insert((meal.timestamp(), seq), Arc::clone(&meal));
        Ok(meal)
    }

    /// Record a glucose reading.
    ///
    /// With `reject_duplicate_readings` on (the default), a second reading
    /// with the same timestamp and phase fails with a duplicate error.
    pub fn add_reading(&mut self, reading: GlucoseReading) -> GlycoResult<StoredReading> {
        let (timestamp, phase) = (reading.timestamp(), reading.phase());
        if self.config.reject_duplicate_readings && self.data.has_reading_at(timestamp, phase) {
            tracing::warn!(%timestamp, %phase, "duplicate reading rejected");
            return Err(DuplicateError::Reading { timestamp, phase }.into());
        }

        let data = Arc::make_mut(&mut self.data);
        let seq = data.take_seq();
        let stored = StoredReading::new(seq, reading);
        data.index_mut(phase)
            .insert((timestamp, seq), Arc::clone(&stored.reading));
        Ok(stored)
    }

    /// Validate and insert a whole batch, all or nothing.
    ///
    /// Every raw record is validated before anything is inserted. Inserts go
    /// to a staged copy that replaces this store only if every record is
    /// accepted.
    pub fn ingest(&mut self, batch: RawBatch) -> GlycoResult<IngestReport> {
        let meals = batch
            .meals
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.validate().map_err(|e| GlycoError::at_record("meal", i, e)))
            .collect::<GlycoResult<Vec<Meal>>>()?;
        let readings = batch
            .readings
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.validate().map_err(|e| GlycoError::at_record("reading", i, e)))
            .collect::<GlycoResult<Vec<GlucoseReading>>>()?;
        let genetic_profile: Option<GeneticProfile> = batch
            .genetic_profile
            .map(|raw| raw.validate().map_err(|e| GlycoError::at_record("genetic_profile", 0, e)))
            .transpose()?;
        let activity_level = batch
            .activity_level
            .map(|raw| {
                ActivityLevel::parse(&raw).map_err(|e| GlycoError::at_record("activity_level", 0, e))
            })
            .transpose()?;

        let mut staged = self.clone();
        let report = IngestReport {
            meals: meals.len(),
            readings: readings.len(),
            genetic_profile,
            activity_level,
        };
        for (i, meal) in meals.into_iter().enumerate() {
            staged
                .add_meal(meal)
                .map_err(|e| GlycoError::at_record("meal", i, e))?;
        }
        for (i, reading) in readings.into_iter().enumerate() {
            staged
                .add_reading(reading)
                .map_err(|e| GlycoError::at_record("reading", i, e))?;
        }

        *self = staged;
        tracing::debug!(
            meals = report.meals,
            readings = report.readings,
            "batch committed"
        );
        Ok(report)
    }

    /// Cheap read-only view of the current contents.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot::new(Arc::clone(&self.data))
    }

    pub fn meal_count(&self) -> usize {
        self.data.meal_count()
    }

    pub fn reading_count(&self) -> usize {
        self.data.reading_count()
    }

    /// Total records (meals and readings).
    pub fn len(&self) -> usize {
        self.meal_count() + self.reading_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IReadingStore for ReadingStore {
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

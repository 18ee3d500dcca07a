use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use super::{Meal, StoredReading};
use crate::errors::ValidationError;

/// A meal paired with the readings that bracket it.
///
/// Ordering invariant: `before.timestamp < meal.timestamp <= after.timestamp`.
/// Built once by the pairer and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SpikeEvent {
    meal: Arc<Meal>,
    before: StoredReading,
    after: StoredReading,
    delta: i64,
    time_to_peak: Duration,
    recovered: bool,
    recovery_time: Option<Duration>,
}

impl SpikeEvent {
    /// Pair a meal with its readings. `recovered_at` is the timestamp of the
    /// first reading that returned near the before-value, if any.
    pub fn new(
        meal: Arc<Meal>,
        before: StoredReading,
        after: StoredReading,
        recovered_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ValidationError> {
        if before.timestamp() >= meal.timestamp() {
            return Err(ValidationError::OutOfOrder {
                reason: format!(
                    "before reading at {} is not earlier than meal {} at {}",
                    before.timestamp(),
                    meal.id(),
                    meal.timestamp()
                ),
            });
        }
        if after.timestamp() < meal.timestamp() {
            return Err(ValidationError::OutOfOrder {
                reason: format!(
                    "after reading at {} precedes meal {} at {}",
                    after.timestamp(),
                    meal.id(),
                    meal.timestamp()
                ),
            });
        }

        let delta = i64::from(after.value()) - i64::from(before.value());
        let time_to_peak = after.timestamp() - meal.timestamp();
        let recovery_time = recovered_at.map(|at| at - meal.timestamp());

        Ok(Self {
            meal,
            before,
            after,
            delta,
            time_to_peak,
            recovered: recovery_time.is_some(),
            recovery_time,
        })
    }

    pub fn meal(&self) -> &Arc<Meal> {
        &self.meal
    }

    pub fn before(&self) -> &StoredReading {
        &self.before
    }

    pub fn after(&self) -> &StoredReading {
        &self.after
    }

    /// `after.value - before.value`, sign preserved.
    pub fn delta(&self) -> i64 {
        self.delta
    }

    /// Absolute size of the excursion.
    pub fn magnitude(&self) -> u64 {
        self.delta.unsigned_abs()
    }

    pub fn time_to_peak(&self) -> Duration {
        self.time_to_peak
    }

    pub fn recovered(&self) -> bool {
        self.recovered
    }

    pub fn recovery_time(&self) -> Option<Duration> {
        self.recovery_time
    }

    /// Events are placed in time by their meal.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.meal.timestamp()
    }
}

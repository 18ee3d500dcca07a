use chrono::{DateTime, Utc};

use glyco_core::models::{Meal, Phase, StoredReading};
use glyco_core::traits::IReadingStore;

/// True when `value` is within `tolerance` (relative) of `baseline`.
pub fn within_tolerance(value: u32, baseline: u32, tolerance: f64) -> bool {
    let diff = (f64::from(value) - f64::from(baseline)).abs();
    diff <= f64::from(baseline) * tolerance
}

/// Earliest reading of either phase after `after` and no later than
/// `meal.ts + window_after` that is back near the before-value.
pub fn find_recovery<S: IReadingStore + ?Sized>(
    store: &S,
    meal: &Meal,
    before: &StoredReading,
    after: &StoredReading,
    window_after: chrono::Duration,
    tolerance: f64,
) -> Option<DateTime<Utc>> {
    let deadline = meal
        .timestamp()
        .checked_add_signed(window_after)
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    [Phase::Before, Phase::After]
        .into_iter()
        .flat_map(|phase| store.readings_near(meal.timestamp(), phase, window_after))
        .filter(|r| r.timestamp() > after.timestamp() && r.timestamp() <= deadline)
        .filter(|r| within_tolerance(r.value(), before.value(), tolerance))
        .min_by_key(|r| (r.timestamp(), r.seq))
        .map(|r| r.timestamp())
}

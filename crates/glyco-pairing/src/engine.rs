use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use glyco_core::config::PairingConfig;
use glyco_core::models::{Meal, Phase, SpikeEvent, StoredReading};
use glyco_core::traits::IReadingStore;

use crate::recovery;

/// Counts from one pairing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingOutcome {
    pub paired: usize,
    /// Meals with no before-reading in the window. Checked first, so a meal
    /// missing both sides is counted here.
    pub skipped_no_before: usize,
    /// Meals with a before-reading but no unclaimed after-reading.
    pub skipped_no_after: usize,
}

impl PairingOutcome {
    pub fn meals_seen(&self) -> usize {
        self.paired + self.skipped_no_before + self.skipped_no_after
    }
}

/// Pairs each meal with its surrounding readings.
///
/// Meals are visited in store order. An after-reading goes to the first meal
/// that wants it; later meals fall through to their next-nearest candidate.
/// Before-readings may be shared.
#[derive(Debug, Clone, Default)]
pub struct SpikePairer {
    config: PairingConfig,
}

impl SpikePairer {
    pub fn new(config: PairingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    /// Spike events in meal order. Meals that cannot be paired are left out.
    pub fn pair<S: IReadingStore + ?Sized>(&self, store: &S) -> Vec<SpikeEvent> {
        self.pair_with_outcome(store).0
    }

    /// Same as [`pair`](Self::pair), plus how many meals were skipped and why.
    pub fn pair_with_outcome<S: IReadingStore + ?Sized>(
        &self,
        store: &S,
    ) -> (Vec<SpikeEvent>, PairingOutcome) {
        let mut claimed: HashSet<u64> = HashSet::new();
        let mut outcome = PairingOutcome::default();
        let mut events = Vec::new();

        for meal in store.meals() {
            let Some(before) = self.find_before(store, &meal) else {
                tracing::debug!(meal_id = %meal.id(), "no before reading, meal skipped");
                outcome.skipped_no_before += 1;
                continue;
            };
            let Some(after) = self.find_after(store, &meal, &claimed) else {
                tracing::debug!(meal_id = %meal.id(), "no unclaimed after reading, meal skipped");
                outcome.skipped_no_after += 1;
                continue;
            };

            let recovered_at = recovery::find_recovery(
                store,
                &meal,
                &before,
                &after,
                self.config.window_after(),
                self.config.recovery_tolerance,
            );

            let meal_id = meal.id().to_string();
            let after_seq = after.seq;
            match SpikeEvent::new(Arc::clone(&meal), before, after, recovered_at) {
                Ok(event) => {
                    claimed.insert(after_seq);
                    tracing::debug!(
                        meal_id = %meal_id,
                        reading_seq = after_seq,
                        delta = event.delta(),
                        "after reading claimed"
                    );
                    events.push(event);
                    outcome.paired += 1;
                }
                Err(e) => {
                    // Candidates are filtered by side of the meal, so this
                    // only happens if the store breaks its ordering contract.
                    tracing::warn!(meal_id = %meal_id, error = %e, "inconsistent pairing, meal skipped");
                    outcome.skipped_no_after += 1;
                }
            }
        }

        tracing::info!(
            paired = outcome.paired,
            skipped_no_before = outcome.skipped_no_before,
            skipped_no_after = outcome.skipped_no_after,
            "pairing finished"
        );
        (events, outcome)
    }

    fn find_before<S: IReadingStore + ?Sized>(&self, store: &S, meal: &Meal) -> Option<StoredReading> {
        store
            .readings_near(meal.timestamp(), Phase::Before, self.config.window_before())
            .into_iter()
            .find(|r| r.timestamp() < meal.timestamp())
    }

    fn find_after<S: IReadingStore + ?Sized>(
        &self,
        store: &S,
        meal: &Meal,
        claimed: &HashSet<u64>,
    ) -> Option<StoredReading> {
        store
            .readings_near(meal.timestamp(), Phase::After, self.config.window_after())
            .into_iter()
            .find(|r| r.timestamp() >= meal.timestamp() && !claimed.contains(&r.seq))
    }
}

use std::collections::{BTreeMap, BTreeSet};

use glyco_core::constants::MAX_PATTERN_EXAMPLES;
use glyco_core::models::{MacroSignature, Macronutrients, MealPattern, SpikeEvent};

/// Round each macro to the nearest multiple of `bucket_grams`.
pub fn signature_for(macros: Macronutrients, bucket_grams: u32) -> MacroSignature {
    let step = f64::from(bucket_grams.max(1));
    let round = |grams: f64| ((grams / step).round() * step) as u32;
    MacroSignature {
        carbs: round(macros.carbs),
        protein: round(macros.protein),
        fat: round(macros.fat),
    }
}

/// Group events by signature. Events inside a bucket are in meal order.
pub(crate) fn group<'a>(
    events: &'a [SpikeEvent],
    bucket_grams: u32,
) -> BTreeMap<MacroSignature, Vec<&'a SpikeEvent>> {
    let mut buckets: BTreeMap<MacroSignature, Vec<&SpikeEvent>> = BTreeMap::new();
    for event in events {
        buckets
            .entry(signature_for(event.meal().macros(), bucket_grams))
            .or_default()
            .push(event);
    }
    for bucket in buckets.values_mut() {
        bucket.sort_by(|a, b| {
            (a.timestamp(), a.meal().id(), a.after().seq).cmp(&(
                b.timestamp(),
                b.meal().id(),
                b.after().seq,
            ))
        });
    }
    buckets
}

pub(crate) fn to_pattern(signature: MacroSignature, events: &[&SpikeEvent]) -> MealPattern {
    let sum: f64 = events.iter().map(|e| e.delta() as f64).sum();
    let mean_delta = if events.is_empty() {
        0.0
    } else {
        sum / events.len() as f64
    };
    let names: BTreeSet<&str> = events.iter().map(|e| e.meal().name()).collect();
    MealPattern {
        signature,
        mean_delta,
        sample_count: events.len(),
        example_meals: names
            .into_iter()
            .take(MAX_PATTERN_EXAMPLES)
            .map(str::to_string)
            .collect(),
    }
}

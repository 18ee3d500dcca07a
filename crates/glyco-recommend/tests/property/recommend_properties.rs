use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use glyco_core::config::RecommendationConfig;
use glyco_core::models::{GlucoseReading, Macronutrients, Meal, Phase, SpikeEvent, StoredReading};
use glyco_recommend::{signature_for, RecommendationEngine};
use proptest::prelude::*;

fn make_event(i: usize, carbs: f64, protein: f64, fat: f64, delta: i64) -> SpikeEvent {
    let meal_ts = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap() + Duration::hours(i as i64);
    let meal = Arc::new(
        Meal::new(format!("m{i}"), format!("Meal {}", i % 7), Macronutrients::new(carbs, protein, fat), meal_ts)
            .unwrap(),
    );
    let seq = i as u64 * 2;
    SpikeEvent::new(
        meal,
        StoredReading::new(
            seq,
            GlucoseReading::new(150, Phase::Before, meal_ts - Duration::minutes(5)).unwrap(),
        ),
        StoredReading::new(
            seq + 1,
            GlucoseReading::new(150 + delta, Phase::After, meal_ts + Duration::minutes(50)).unwrap(),
        ),
        None,
    )
    .unwrap()
}

fn arb_events() -> impl Strategy<Value = Vec<SpikeEvent>> {
    // Coarse macros so buckets actually collide.
    prop::collection::vec((0u8..4, 0u8..3, 0u8..3, -60i64..120), 0..40).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (c, p, f, d))| {
                make_event(i, f64::from(c) * 20.0, f64::from(p) * 15.0, f64::from(f) * 10.0, d)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn sub_threshold_buckets_never_recommended(
        events in arb_events(),
        min_samples in 1usize..5,
        top_n in 1usize..5,
    ) {
        let config = RecommendationConfig { min_samples, top_n, ..RecommendationConfig::default() };
        let mut counts = HashMap::new();
        for e in &events {
            *counts.entry(signature_for(e.meal().macros(), config.bucket_grams)).or_insert(0usize) += 1;
        }

        let recs = RecommendationEngine::new(config).recommend(&events);
        for p in recs.avoid.iter().chain(&recs.prefer) {
            prop_assert!(counts[&p.signature] >= min_samples);
            prop_assert_eq!(counts[&p.signature], p.sample_count);
        }
        prop_assert!(recs.avoid.len() <= top_n && recs.prefer.len() <= top_n);
    }

    #[test]
    fn avoid_and_prefer_disjoint_and_ordered(events in arb_events()) {
        let recs = RecommendationEngine::default().recommend(&events);
        for a in &recs.avoid {
            prop_assert!(recs.prefer.iter().all(|p| p.signature != a.signature));
        }
        for pair in recs.avoid.windows(2) {
            prop_assert!(pair[0].mean_delta >= pair[1].mean_delta);
        }
        for pair in recs.prefer.windows(2) {
            prop_assert!(pair[0].mean_delta <= pair[1].mean_delta);
        }
        if let (Some(worst_prefer), Some(best_avoid)) = (recs.prefer.last(), recs.avoid.last()) {
            prop_assert!(worst_prefer.mean_delta <= best_avoid.mean_delta);
        }
    }
}

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use glyco_core::models::{
    GlucoseReading, Granularity, Macronutrients, Meal, Phase, SpikeEvent, StoredReading,
};
use glyco_trends::TrendAggregator;
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn make_event(i: usize, minute: i64, before: u32, after: u32) -> SpikeEvent {
    let meal_ts = base() + Duration::minutes(minute);
    let meal = Arc::new(
        Meal::new(format!("m{i}"), "Meal", Macronutrients::new(10.0, 10.0, 10.0), meal_ts).unwrap(),
    );
    let seq = i as u64 * 2;
    let b = StoredReading::new(
        seq,
        GlucoseReading::new(i64::from(before), Phase::Before, meal_ts - Duration::minutes(10))
            .unwrap(),
    );
    let a = StoredReading::new(
        seq + 1,
        GlucoseReading::new(i64::from(after), Phase::After, meal_ts + Duration::minutes(45)).unwrap(),
    );
    SpikeEvent::new(meal, b, a, None).unwrap()
}

fn arb_events() -> impl Strategy<Value = Vec<SpikeEvent>> {
    // Ninety days, minute resolution.
    prop::collection::vec((0i64..129_600, 60u32..250, 60u32..250), 0..60).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (m, b, a))| make_event(i, m, b, a))
            .collect()
    })
}

fn arb_granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Day),
        Just(Granularity::Week),
        Just(Granularity::Month),
    ]
}

proptest! {
    #[test]
    fn aggregation_independent_of_order(
        events in arb_events(),
        g in arb_granularity(),
        seed in any::<u64>(),
    ) {
        let agg = TrendAggregator::default();
        let expected = agg.aggregate(&events, g);

        let mut shuffled = events.clone();
        // Rotate, then reverse.
        if !shuffled.is_empty() {
            let k = (seed % shuffled.len() as u64) as usize;
            shuffled.rotate_left(k);
            shuffled.reverse();
        }
        prop_assert_eq!(agg.aggregate(&shuffled, g), expected);
    }

    #[test]
    fn aggregation_idempotent(events in arb_events(), g in arb_granularity()) {
        let agg = TrendAggregator::default();
        prop_assert_eq!(agg.aggregate(&events, g), agg.aggregate(&events, g));
    }

    #[test]
    fn sample_counts_cover_all_events(events in arb_events(), g in arb_granularity()) {
        let summaries = TrendAggregator::default().aggregate(&events, g);
        let total: usize = summaries.iter().map(|s| s.sample_count).sum();
        prop_assert_eq!(total, events.len());
        for s in &summaries {
            prop_assert!(s.sample_count >= 1);
            prop_assert!(s.min_delta as f64 <= s.mean_delta && s.mean_delta <= s.max_delta as f64 + 1e-9);
            prop_assert!(s.high_spike_count <= s.sample_count);
        }
        for pair in summaries.windows(2) {
            prop_assert!(pair[0].period_end <= pair[1].period_start);
        }
    }
}

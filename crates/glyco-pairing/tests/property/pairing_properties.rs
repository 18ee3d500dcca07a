use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use glyco_core::config::StoreConfig;
use glyco_core::models::{GlucoseReading, Macronutrients, Meal, Phase};
use glyco_pairing::SpikePairer;
use glyco_store::ReadingStore;
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()
}

fn arb_phase() -> impl Strategy<Value = Phase> {
    prop_oneof![Just(Phase::Before), Just(Phase::After)]
}

/// Meals and readings spread over two days, minute resolution.
fn arb_day() -> impl Strategy<Value = (Vec<i64>, Vec<(i64, u32, Phase)>)> {
    (
        prop::collection::vec(0i64..2880, 0..12),
        prop::collection::vec((0i64..2880, 50u32..260, arb_phase()), 0..80),
    )
}

fn build(meals: &[i64], readings: &[(i64, u32, Phase)]) -> ReadingStore {
    let mut store = ReadingStore::new(StoreConfig {
        reject_duplicate_readings: false,
    });
    for (i, &minute) in meals.iter().enumerate() {
        let meal = Meal::new(
            format!("meal-{i}"),
            "Meal",
            Macronutrients::new(30.0, 15.0, 10.0),
            base() + Duration::minutes(minute),
        )
        .unwrap();
        store.add_meal(meal).unwrap();
    }
    for &(minute, value, phase) in readings {
        let reading =
            GlucoseReading::new(i64::from(value), phase, base() + Duration::minutes(minute)).unwrap();
        store.add_reading(reading).unwrap();
    }
    store
}

proptest! {
    #[test]
    fn pairing_is_deterministic((meals, readings) in arb_day()) {
        let store = build(&meals, &readings);
        let pairer = SpikePairer::default();
        prop_assert_eq!(pairer.pair(&store), pairer.pair(&store));
        prop_assert_eq!(pairer.pair(&store), pairer.pair(&store.snapshot()));
    }

    #[test]
    fn delta_is_exact_and_signed((meals, readings) in arb_day()) {
        let store = build(&meals, &readings);
        for event in SpikePairer::default().pair(&store) {
            let expected = i64::from(event.after().value()) - i64::from(event.before().value());
            prop_assert_eq!(event.delta(), expected);
            prop_assert!(event.before().timestamp() < event.timestamp());
            prop_assert!(event.after().timestamp() >= event.timestamp());
        }
    }

    #[test]
    fn meals_without_before_never_paired((meals, readings) in arb_day()) {
        let store = build(&meals, &readings);
        let window = Duration::minutes(120);
        let paired: HashSet<String> = SpikePairer::default()
            .pair(&store)
            .iter()
            .map(|e| e.meal().id().to_string())
            .collect();

        for (i, &minute) in meals.iter().enumerate() {
            let meal_ts = base() + Duration::minutes(minute);
            let has_before = readings.iter().any(|&(m, _, p)| {
                let ts = base() + Duration::minutes(m);
                p == Phase::Before && ts < meal_ts && meal_ts - ts <= window
            });
            if !has_before {
                let meal_id = format!("meal-{}", i);
                prop_assert!(!paired.contains(&meal_id));
            }
        }
    }

    #[test]
    fn after_readings_claimed_at_most_once((meals, readings) in arb_day()) {
        let store = build(&meals, &readings);
        let (events, outcome) = SpikePairer::default().pair_with_outcome(&store);
        let mut seen = HashSet::new();
        for event in &events {
            prop_assert!(seen.insert(event.after().seq));
        }
        prop_assert_eq!(outcome.meals_seen(), meals.len());
        prop_assert_eq!(outcome.paired, events.len());
    }
}

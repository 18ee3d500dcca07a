use chrono::{DateTime, Duration, TimeZone, Utc};
use glyco_core::config::StoreConfig;
use glyco_core::models::{GlucoseReading, Phase};
use glyco_core::traits::IReadingStore;
use glyco_store::ReadingStore;
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn arb_phase() -> impl Strategy<Value = Phase> {
    prop_oneof![Just(Phase::Before), Just(Phase::After)]
}

fn arb_readings() -> impl Strategy<Value = Vec<(i64, u32, Phase)>> {
    prop::collection::vec((0i64..1440, 40u32..300, arb_phase()), 0..60)
}

fn build(readings: &[(i64, u32, Phase)]) -> ReadingStore {
    let mut store = ReadingStore::new(StoreConfig {
        reject_duplicate_readings: false,
    });
    for &(minute, value, phase) in readings {
        let ts = base() + Duration::minutes(minute);
        store
            .add_reading(GlucoseReading::new(i64::from(value), phase, ts).unwrap())
            .unwrap();
    }
    store
}

// ── Lookups return only in-window readings of the asked phase, nearest first ──

proptest! {
    #[test]
    fn readings_near_filtered_and_sorted(
        readings in arb_readings(),
        probe in 0i64..1440,
        window in 0i64..300,
        phase in arb_phase(),
    ) {
        let store = build(&readings);
        let ts = base() + Duration::minutes(probe);
        let found = store.readings_near(ts, phase, Duration::minutes(window));

        let expected = readings
            .iter()
            .filter(|(m, _, p)| *p == phase && (m - probe).abs() <= window)
            .count();
        prop_assert_eq!(found.len(), expected);

        for pair in found.windows(2) {
            let d0 = (pair[0].timestamp() - ts).abs();
            let d1 = (pair[1].timestamp() - ts).abs();
            prop_assert!(d0 <= d1);
            if d0 == d1 {
                prop_assert!(
                    (pair[0].timestamp(), pair[0].seq) < (pair[1].timestamp(), pair[1].seq)
                );
            }
        }
    }
}

// ── Snapshots never change after they are taken ──────────────────────────

proptest! {
    #[test]
    fn snapshot_stable_under_writes(
        first in arb_readings(),
        second in arb_readings(),
    ) {
        let mut store = build(&first);
        let snap = store.snapshot();
        let count = snap.reading_count();

        for &(minute, value, phase) in &second {
            let ts = base() + Duration::minutes(minute);
            store
                .add_reading(GlucoseReading::new(i64::from(value), phase, ts).unwrap())
                .unwrap();
        }

        prop_assert_eq!(snap.reading_count(), count);
        prop_assert_eq!(store.reading_count(), first.len() + second.len());
    }
}

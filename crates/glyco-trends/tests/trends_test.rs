use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use glyco_core::config::TrendsConfig;
use glyco_core::models::{
    GlucoseReading, Granularity, Macronutrients, Meal, Phase, SpikeEvent, StoredReading,
};
use glyco_trends::TrendAggregator;

fn ts(mo: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, mo, d, h, 0, 0).unwrap()
}

fn event(id: &str, meal_ts: DateTime<Utc>, before: i64, after: i64, recovered: bool) -> SpikeEvent {
    let meal = Arc::new(
        Meal::new(id, id, Macronutrients::new(40.0, 20.0, 10.0), meal_ts).unwrap(),
    );
    let b = StoredReading::new(
        0,
        GlucoseReading::new(before, Phase::Before, meal_ts - Duration::minutes(15)).unwrap(),
    );
    let a = StoredReading::new(
        1,
        GlucoseReading::new(after, Phase::After, meal_ts + Duration::minutes(60)).unwrap(),
    );
    let recovered_at = recovered.then(|| meal_ts + Duration::minutes(150));
    SpikeEvent::new(meal, b, a, recovered_at).unwrap()
}

#[test]
fn daily_summary_statistics() {
    let events = vec![
        event("a", ts(3, 4, 8), 90, 150, true),  // +60
        event("b", ts(3, 4, 13), 100, 120, false), // +20
        event("c", ts(3, 4, 19), 110, 100, true), // -10
    ];
    let summaries = TrendAggregator::default().aggregate(&events, Granularity::Day);

    assert_eq!(summaries.len(), 1);
    let s = &summaries[0];
    assert_eq!(s.period_start, ts(3, 4, 0));
    assert_eq!(s.period_end, ts(3, 5, 0));
    assert_eq!(s.sample_count, 3);
    assert!((s.mean_delta - 70.0 / 3.0).abs() < 1e-9);
    assert_eq!(s.median_delta, 20.0);
    assert!((s.mean_magnitude - 30.0).abs() < 1e-9);
    assert_eq!(s.max_delta, 60);
    assert_eq!(s.min_delta, -10);
    assert_eq!(s.high_spike_count, 1);
    assert_eq!(s.recovered_count, 2);
    assert!((s.recovery_rate() - 2.0 / 3.0).abs() < 1e-9);
    assert!((s.mean_time_to_peak_minutes - 60.0).abs() < 1e-9);

    let mean = 70.0 / 3.0;
    let var = ((60.0f64 - mean).powi(2) + (20.0f64 - mean).powi(2) + (-10.0f64 - mean).powi(2)) / 3.0;
    assert!((s.std_delta - var.sqrt()).abs() < 1e-9);
}

#[test]
fn empty_periods_are_omitted_and_sorted() {
    let events = vec![
        event("late", ts(3, 20, 12), 90, 130, false),
        event("early", ts(3, 1, 12), 90, 100, false),
    ];
    let summaries = TrendAggregator::default().aggregate(&events, Granularity::Day);
    assert_eq!(summaries.len(), 2);
    assert!(summaries[0].period_start < summaries[1].period_start);
    assert!(summaries[0].contains(ts(3, 1, 12)));
}

#[test]
fn weekly_and_monthly_grouping() {
    let events = vec![
        event("mon", ts(3, 11, 8), 90, 140, false),
        event("sun", ts(3, 17, 20), 90, 120, false),
        event("next", ts(3, 18, 8), 90, 110, false),
        event("april", ts(4, 2, 8), 90, 95, false),
    ];
    let agg = TrendAggregator::default();

    let weeks = agg.aggregate(&events, Granularity::Week);
    let counts: Vec<usize> = weeks.iter().map(|s| s.sample_count).collect();
    assert_eq!(counts, vec![2, 1, 1]);

    let months = agg.aggregate(&events, Granularity::Month);
    assert_eq!(months.len(), 2);
    assert_eq!(months[0].sample_count, 3);
    assert_eq!(months[1].period_start, ts(4, 1, 0));
}

#[test]
fn threshold_is_inclusive_and_configurable() {
    let events = vec![
        event("x", ts(3, 4, 8), 100, 140, false), // exactly 40
        event("y", ts(3, 4, 12), 100, 125, false),
    ];
    let default = TrendAggregator::default().aggregate(&events, Granularity::Day);
    assert_eq!(default[0].high_spike_count, 1);

    let strict = TrendAggregator::new(TrendsConfig {
        high_spike_threshold: 20,
        ..TrendsConfig::default()
    });
    assert_eq!(strict.aggregate(&events, Granularity::Day)[0].high_spike_count, 2);
}

#[test]
fn large_drop_is_not_a_high_spike() {
    let events = vec![event("drop", ts(3, 4, 8), 180, 100, false)];
    let s = &TrendAggregator::default().aggregate(&events, Granularity::Day)[0];
    assert_eq!(s.high_spike_count, 0);
    assert!((s.mean_magnitude - 80.0).abs() < 1e-9);
}

#[test]
fn default_granularity_from_config() {
    let agg = TrendAggregator::new(TrendsConfig {
        default_granularity: Granularity::Month,
        ..TrendsConfig::default()
    });
    let events = vec![event("a", ts(3, 4, 8), 90, 100, false)];
    assert_eq!(agg.aggregate_default(&events)[0].granularity, Granularity::Month);
}

#[test]
fn empty_input_gives_empty_output() {
    for g in Granularity::all() {
        assert!(TrendAggregator::default().aggregate(&[], g).is_empty());
    }
}

#[test]
fn median_of_even_count_averages_middle_pair() {
    let events = vec![
        event("a", ts(3, 4, 8), 100, 170, false),  // +70
        event("b", ts(3, 4, 12), 100, 110, false), // +10
        event("c", ts(3, 4, 16), 100, 140, false), // +40
        event("d", ts(3, 4, 20), 100, 95, true),   // -5
    ];
    let summaries = TrendAggregator::default().aggregate(&events, Granularity::Day);
    assert_eq!(summaries[0].median_delta, 25.0);
    assert!((summaries[0].recovery_rate() - 0.25).abs() < 1e-9);
}

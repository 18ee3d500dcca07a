use chrono::{Duration, TimeZone, Utc};
use glyco_core::config::RiskConfig;
use glyco_core::models::{ActivityLevel, GeneticProfile, Granularity, TrendSummary};
use glyco_risk::{effective_weights, RiskScorer};
use proptest::prelude::*;

fn summary(mean_magnitude: f64, high: usize, samples: usize) -> TrendSummary {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    TrendSummary {
        period_start: start,
        period_end: start + Duration::days(1),
        granularity: Granularity::Day,
        mean_delta: mean_magnitude,
        median_delta: mean_magnitude,
        max_delta: 0,
        min_delta: 0,
        mean_magnitude,
        std_delta: 0.0,
        high_spike_count: high.min(samples),
        recovered_count: 0,
        mean_time_to_peak_minutes: 0.0,
        sample_count: samples,
    }
}

fn arb_activity() -> impl Strategy<Value = Option<ActivityLevel>> {
    proptest::option::of(prop_oneof![
        Just(ActivityLevel::Sedentary),
        Just(ActivityLevel::Light),
        Just(ActivityLevel::Moderate),
        Just(ActivityLevel::Active),
    ])
}

fn arb_config() -> impl Strategy<Value = RiskConfig> {
    (0.01f64..10.0, 0.0f64..10.0, 0.0f64..10.0).prop_map(|(s, r, g)| RiskConfig {
        spike_weight: s,
        high_spike_ratio_weight: r,
        genetic_weight: g,
        ..RiskConfig::default()
    })
}

proptest! {
    #[test]
    fn effective_weights_sum_to_one(config in arb_config(), has_profile in any::<bool>()) {
        let w = effective_weights(&config, has_profile);
        prop_assert!((w.spike + w.high_spike_ratio + w.genetic - 1.0).abs() < 1e-9);
        if !has_profile {
            prop_assert_eq!(w.genetic, 0.0);
        }
    }

    #[test]
    fn score_monotonic_in_spike_term(
        a in 0.0f64..300.0,
        b in 0.0f64..300.0,
        high in 0usize..5,
        samples in 1usize..5,
        risk in proptest::option::of(0.0f64..=1.0),
    ) {
        let scorer = RiskScorer::default();
        let profile = risk.map(|r| GeneticProfile::new(r, Vec::<String>::new(), false).unwrap());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let s_lo = scorer.score(&summary(lo, high, samples), profile.as_ref(), None);
        let s_hi = scorer.score(&summary(hi, high, samples), profile.as_ref(), None);
        prop_assert!(s_lo.composite_score <= s_hi.composite_score + 1e-12);
        prop_assert!(s_lo.tier <= s_hi.tier);
    }

    #[test]
    fn composite_within_unit_interval(
        magnitude in 0.0f64..1000.0,
        high in 0usize..10,
        samples in 1usize..10,
        risk in proptest::option::of(0.0f64..=1.0),
        activity in arb_activity(),
        config in arb_config(),
    ) {
        let scorer = RiskScorer::new(config);
        let profile = risk.map(|r| GeneticProfile::new(r, Vec::<String>::new(), false).unwrap());
        let a = scorer.score(&summary(magnitude, high, samples), profile.as_ref(), activity);
        prop_assert!((0.0..=1.0).contains(&a.composite_score));
        prop_assert!((0.0..=1.0).contains(&a.breakdown.genetic_term));
        prop_assert!((a.breakdown.weight_sum() - 1.0).abs() < 1e-9);
    }
}

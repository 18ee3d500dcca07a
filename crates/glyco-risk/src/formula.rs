use glyco_core::config::RiskConfig;
use glyco_core::models::{ActivityLevel, GeneticProfile, ScoreBreakdown, TrendSummary};

/// Linear map of `x` from `[lo, hi]` onto `[0, 1]`, clamped.
///
/// A zero-width or inverted range yields 0.
pub fn normalize(x: f64, lo: f64, hi: f64) -> f64 {
    let width = hi - lo;
    if width.is_nan() || width <= 0.0 || x.is_nan() {
        return 0.0;
    }
    ((x - lo) / width).clamp(0.0, 1.0)
}

/// Weights actually applied to one score. They sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveWeights {
    pub spike: f64,
    pub high_spike_ratio: f64,
    pub genetic: f64,
}

/// Scale the configured weights to sum to 1, dropping the genetic weight
/// when there is no profile.
pub fn effective_weights(config: &RiskConfig, has_profile: bool) -> EffectiveWeights {
    let genetic = if has_profile { config.genetic_weight } else { 0.0 };
    let total = config.spike_weight + config.high_spike_ratio_weight + genetic;
    if total <= 0.0 {
        // Rejected by config validation; split evenly rather than divide by zero.
        return EffectiveWeights {
            spike: 0.5,
            high_spike_ratio: 0.5,
            genetic: 0.0,
        };
    }
    EffectiveWeights {
        spike: config.spike_weight / total,
        high_spike_ratio: config.high_spike_ratio_weight / total,
        genetic: genetic / total,
    }
}

/// Multiplier for `activity`, 1.0 when it is unknown.
pub fn activity_multiplier(activity: Option<ActivityLevel>, config: &RiskConfig) -> f64 {
    activity.map_or(1.0, |level| config.activity_multipliers.for_level(level))
}

/// Genetic risk scaled by activity, clamped to `[0, 1]`. `None` without a
/// profile.
pub fn adjusted_genetic_risk(
    profile: Option<&GeneticProfile>,
    activity: Option<ActivityLevel>,
    config: &RiskConfig,
) -> Option<f64> {
    let multiplier = activity_multiplier(activity, config);
    profile.map(|p| (p.risk_score() * multiplier).clamp(0.0, 1.0))
}

/// Composite score for a period, in `[0, 1]`.
pub fn compute(
    summary: &TrendSummary,
    profile: Option<&GeneticProfile>,
    activity: Option<ActivityLevel>,
    config: &RiskConfig,
) -> f64 {
    compute_breakdown(summary, profile, activity, config).composite
}

/// Composite score with every term and weight exposed.
pub fn compute_breakdown(
    summary: &TrendSummary,
    profile: Option<&GeneticProfile>,
    activity: Option<ActivityLevel>,
    config: &RiskConfig,
) -> ScoreBreakdown {
    let weights = effective_weights(config, profile.is_some());

    let spike_term = normalize(summary.mean_magnitude, 0.0, config.mean_delta_ceiling);
    let high_spike_ratio_term = normalize(summary.high_spike_ratio(), 0.0, 1.0);
    let genetic_term = adjusted_genetic_risk(profile, activity, config).unwrap_or(0.0);
    let multiplier = if profile.is_some() {
        activity_multiplier(activity, config)
    } else {
        1.0
    };

    let composite = (spike_term * weights.spike
        + high_spike_ratio_term * weights.high_spike_ratio
        + genetic_term * weights.genetic)
        .clamp(0.0, 1.0);

    ScoreBreakdown {
        spike_term,
        high_spike_ratio_term,
        genetic_term,
        activity_multiplier: multiplier,
        spike_weight: weights.spike,
        high_spike_ratio_weight: weights.high_spike_ratio,
        genetic_weight: weights.genetic,
        composite,
    }
}

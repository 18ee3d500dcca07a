use rayon::prelude::*;

use glyco_core::config::{defaults, RiskConfig};
use glyco_core::models::{
    ActivityLevel, GeneticProfile, Granularity, MealRiskAssessment, RiskAssessment, ScoreBreakdown, SpikeEvent,
    TrendSummary,
};
use glyco_trends::period_bounds;

use crate::{formula, tiers};

/// Scores trend periods and meals against an optional genetic profile and
/// activity level.
///
/// Both are always passed in; the scorer holds no per-user state.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    config: RiskConfig,
    /// Used only when a single meal is scored as its own period.
    high_spike_threshold: i64,
}

impl RiskScorer {
    pub fn new(config: RiskConfig) -> Self {
        Self {
            config,
            high_spike_threshold: defaults::DEFAULT_HIGH_SPIKE_THRESHOLD,
        }
    }

    /// Use the trend stage's high-spike threshold for per-meal scoring.
    pub fn with_high_spike_threshold(mut self, threshold: i64) -> Self {
        self.high_spike_threshold = threshold;
        self
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Composite score and tier for one period.
    pub fn score(
        &self,
        summary: &TrendSummary,
        profile: Option<&GeneticProfile>,
        activity: Option<ActivityLevel>,
    ) -> RiskAssessment {
        let breakdown = self.score_breakdown(summary, profile, activity);
        RiskAssessment {
            period: summary.clone(),
            composite_score: breakdown.composite,
            tier: tiers::classify(breakdown.composite, &self.config.tiers),
            breakdown,
        }
    }

    /// Each weighted term of the score, for inspection.
    pub fn score_breakdown(
        &self,
        summary: &TrendSummary,
        profile: Option<&GeneticProfile>,
        activity: Option<ActivityLevel>,
    ) -> ScoreBreakdown {
        formula::compute_breakdown(summary, profile, activity, &self.config)
    }

    /// Genetic risk after the activity multiplier, if there is a profile.
    pub fn adjusted_genetic_risk(
        &self,
        profile: Option<&GeneticProfile>,
        activity: Option<ActivityLevel>,
    ) -> Option<f64> {
        formula::adjusted_genetic_risk(profile, activity, &self.config)
    }

    /// Score many periods in parallel. Output order matches input order.
    pub fn score_all(
        &self,
        summaries: &[TrendSummary],
        profile: Option<&GeneticProfile>,
        activity: Option<ActivityLevel>,
    ) -> Vec<RiskAssessment> {
        let assessments: Vec<RiskAssessment> = summaries
            .par_iter()
            .map(|summary| self.score(summary, profile, activity))
            .collect();

        tracing::info!(
            periods = assessments.len(),
            genetic_profile = profile.is_some(),
            activity = activity.map(|a| a.as_str()),
            "risk scoring finished"
        );
        assessments
    }

    /// Score one meal's spike as if it were a period with a single sample.
    pub fn assess_meal(
        &self,
        event: &SpikeEvent,
        profile: Option<&GeneticProfile>,
        activity: Option<ActivityLevel>,
    ) -> MealRiskAssessment {
        let summary = single_event_summary(event, self.high_spike_threshold);
        let breakdown = self.score_breakdown(&summary, profile, activity);
        MealRiskAssessment {
            meal_id: event.meal().id().to_string(),
            meal_name: event.meal().name().to_string(),
            delta: event.delta(),
            composite_score: breakdown.composite,
            tier: tiers::classify(breakdown.composite, &self.config.tiers),
        }
    }

    /// Score every meal in parallel, preserving input order.
    pub fn assess_meals(
        &self,
        events: &[SpikeEvent],
        profile: Option<&GeneticProfile>,
        activity: Option<ActivityLevel>,
    ) -> Vec<MealRiskAssessment> {
        events
            .par_iter()
            .map(|event| self.assess_meal(event, profile, activity))
            .collect()
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(RiskConfig::default())
    }
}

/// The day containing the meal, holding only this event.
fn single_event_summary(event: &SpikeEvent, high_spike_threshold: i64) -> TrendSummary {
    let (period_start, period_end) = period_bounds(event.timestamp(), Granularity::Day);
    let delta = event.delta();
    TrendSummary {
        period_start,
        period_end,
        granularity: Granularity::Day,
        mean_delta: delta as f64,
        median_delta: delta as f64,
        max_delta: delta,
        min_delta: delta,
        mean_magnitude: event.magnitude() as f64,
        std_delta: 0.0,
        high_spike_count: usize::from(delta >= high_spike_threshold),
        recovered_count: usize::from(event.recovered()),
        mean_time_to_peak_minutes: event.time_to_peak().num_seconds() as f64 / 60.0,
        sample_count: 1,
    }
}

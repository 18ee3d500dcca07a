use glyco_core::config::RecommendationConfig;
use glyco_core::models::{ActivityLevel, MealPattern, Recommendations, RiskTier, SpikeEvent};

use crate::{bucket, guidance};

/// Ranks macro buckets into avoid and prefer lists.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Every bucket with at least `min_samples` events, worst first.
    ///
    /// Ties on mean delta are broken by signature order.
    pub fn ranked_patterns(&self, events: &[SpikeEvent]) -> Vec<MealPattern> {
        let mut patterns: Vec<MealPattern> = bucket::group(events, self.config.bucket_grams)
            .into_iter()
            .filter(|(_, bucket)| bucket.len() >= self.config.min_samples)
            .map(|(signature, bucket)| bucket::to_pattern(signature, &bucket))
            .collect();
        patterns.sort_by(|a, b| {
            b.mean_delta
                .total_cmp(&a.mean_delta)
                .then_with(|| a.signature.cmp(&b.signature))
        });
        patterns
    }

    /// Split the ranked buckets into `avoid` (worst first) and `prefer`
    /// (best first). The upper half of the ranking feeds `avoid` and the
    /// lower half feeds `prefer`, so a bucket never lands in both.
    pub fn recommend(&self, events: &[SpikeEvent]) -> Recommendations {
        let ranked = self.ranked_patterns(events);
        let k = ranked.len();
        let avoid_len = self.config.top_n.min(k.div_ceil(2));
        let prefer_len = self.config.top_n.min(k / 2);

        let avoid: Vec<MealPattern> = ranked.iter().take(avoid_len).cloned().collect();
        let prefer: Vec<MealPattern> = ranked.iter().rev().take(prefer_len).cloned().collect();

        if k == 0 {
            tracing::debug!(events = events.len(), "no bucket has enough samples");
        }
        tracing::info!(
            eligible_buckets = k,
            avoid = avoid.len(),
            prefer = prefer.len(),
            "recommendations ranked"
        );
        Recommendations {
            avoid,
            prefer,
            guidance: Vec::new(),
        }
    }

    /// General advice for the highest tier of a run.
    ///
    /// Adds a post-meal activity tip for sedentary or light activity, and a
    /// suggestion to seek professional advice when the activity-adjusted
    /// genetic risk exceeds `genetic_advice_threshold`.
    pub fn guidance(
        &self,
        max_tier: Option<RiskTier>,
        activity: Option<ActivityLevel>,
        adjusted_genetic_risk: Option<f64>,
    ) -> Vec<String> {
        guidance::compose(
            max_tier,
            activity,
            adjusted_genetic_risk,
            self.config.genetic_advice_threshold,
        )
    }

    /// `recommend` plus `guidance` in one value.
    pub fn recommend_with_guidance(
        &self,
        events: &[SpikeEvent],
        max_tier: Option<RiskTier>,
        activity: Option<ActivityLevel>,
        adjusted_genetic_risk: Option<f64>,
    ) -> Recommendations {
        let mut recommendations = self.recommend(events);
        recommendations.guidance = self.guidance(max_tier, activity, adjusted_genetic_risk);
        recommendations
    }
}

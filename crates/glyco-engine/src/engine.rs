use glyco_core::config::GlycoConfig;
use glyco_core::constants::VERSION;
use glyco_core::errors::GlycoResult;
use glyco_core::models::{ActivityLevel, GeneticProfile, Granularity};
use glyco_observability::events;
use glyco_pairing::SpikePairer;
use glyco_recommend::RecommendationEngine;
use glyco_risk::RiskScorer;
use glyco_store::{IngestReport, RawBatch, SharedReadingStore, StoreSnapshot};
use glyco_trends::TrendAggregator;

use crate::report::AnalysisReport;

/// Runs the full analysis pipeline against store snapshots.
///
/// Holds only configuration. Every run is a pure function of the snapshot,
/// the optional genetic profile and activity level, and the granularity.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    config: GlycoConfig,
    pairer: SpikePairer,
    aggregator: TrendAggregator,
    scorer: RiskScorer,
    recommender: RecommendationEngine,
}

impl AnalysisEngine {
    /// Build an engine from a validated config.
    pub fn new(config: GlycoConfig) -> GlycoResult<Self> {
        config.validate()?;
        Ok(Self::assemble(config))
    }

    fn assemble(config: GlycoConfig) -> Self {
        Self {
            pairer: SpikePairer::new(config.pairing.clone()),
            aggregator: TrendAggregator::new(config.trends.clone()),
            scorer: RiskScorer::new(config.risk.clone())
                .with_high_spike_threshold(config.trends.high_spike_threshold),
            recommender: RecommendationEngine::new(config.recommendation.clone()),
            config,
        }
    }

    /// Parse a TOML config and build an engine from it.
    pub fn from_toml(toml_str: &str) -> GlycoResult<Self> {
        Self::new(GlycoConfig::from_toml(toml_str)?)
    }

    pub fn config(&self) -> &GlycoConfig {
        &self.config
    }

    /// A shared store configured from this engine's `store` section.
    pub fn new_store(&self) -> SharedReadingStore {
        SharedReadingStore::new(self.config.store.clone())
    }

    /// Ingest a batch into `store`, logging the outcome either way.
    pub fn ingest(&self, store: &SharedReadingStore, batch: RawBatch) -> GlycoResult<IngestReport> {
        match store.ingest(batch) {
            Ok(report) => {
                events::batch_ingested(
                    report.meals,
                    report.readings,
                    report.genetic_profile.is_some(),
                );
                Ok(report)
            }
            Err(e) => {
                events::batch_rejected(&e.to_string());
                Err(e)
            }
        }
    }

    /// Snapshot `store` and analyze it.
    pub fn run(
        &self,
        store: &SharedReadingStore,
        profile: Option<&GeneticProfile>,
        activity: Option<ActivityLevel>,
        granularity: Granularity,
    ) -> GlycoResult<AnalysisReport> {
        let snapshot = store.snapshot()?;
        Ok(self.generate_report(&snapshot, profile, activity, granularity))
    }

    /// Analyze with the configured default granularity.
    pub fn run_default(
        &self,
        store: &SharedReadingStore,
        profile: Option<&GeneticProfile>,
        activity: Option<ActivityLevel>,
    ) -> GlycoResult<AnalysisReport> {
        self.run(store, profile, activity, self.config.trends.default_granularity)
    }

    /// Run every stage over one snapshot.
    ///
    /// Total over validated input: sparse data gives a smaller report, never
    /// an error.
    pub fn generate_report(
        &self,
        snapshot: &StoreSnapshot,
        profile: Option<&GeneticProfile>,
        activity: Option<ActivityLevel>,
        granularity: Granularity,
    ) -> AnalysisReport {
        let span = glyco_observability::analysis_span!(snapshot.version(), granularity);
        let _guard = span.enter();

        let (spikes, pairing) = {
            let _s = glyco_observability::pairing_span!(snapshot.meal_count()).entered();
            self.pairer.pair_with_outcome(snapshot)
        };
        events::pairing_completed(pairing.paired, pairing.skipped_no_before, pairing.skipped_no_after);

        let summaries = {
            let _s = glyco_observability::aggregation_span!(spikes.len()).entered();
            self.aggregator.aggregate(&spikes, granularity)
        };
        events::aggregation_completed(granularity.as_str(), spikes.len(), summaries.len());

        let (assessments, meal_assessments) = {
            let _s = glyco_observability::scoring_span!(summaries.len(), profile.is_some()).entered();
            (
                self.scorer.score_all(&summaries, profile, activity),
                self.scorer.assess_meals(&spikes, profile, activity),
            )
        };
        let max_tier = assessments.iter().map(|a| a.tier).max();
        events::assessment_completed(
            assessments.len(),
            meal_assessments.len(),
            max_tier.map(|t| t.as_str()),
        );

        let adjusted_genetic_risk = self.scorer.adjusted_genetic_risk(profile, activity);
        let recommendations = self.recommender.recommend_with_guidance(
            &spikes,
            max_tier,
            activity,
            adjusted_genetic_risk,
        );
        events::recommendations_emitted(
            recommendations.avoid.len(),
            recommendations.prefer.len(),
            recommendations.guidance.len(),
        );

        let report = AnalysisReport {
            engine_version: VERSION,
            granularity,
            snapshot_version: snapshot.version(),
            pairing,
            summaries,
            assessments,
            meal_assessments,
            recommendations,
            genetic_profile_used: profile.is_some(),
            activity_level: activity,
            adjusted_genetic_risk,
        };
        events::report_generated(report.snapshot_version, spikes.len(), report.genetic_profile_used);
        report
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::assemble(GlycoConfig::default())
    }
}

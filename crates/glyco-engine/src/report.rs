use serde::Serialize;

use glyco_core::errors::GlycoResult;
use glyco_core::models::{
    ActivityLevel, Granularity, MealRiskAssessment, Recommendations, RiskAssessment, RiskTier, TrendSummary,
};
use glyco_pairing::PairingOutcome;

/// Everything one analysis run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Version of the engine that produced the report.
    pub engine_version: &'static str,
    pub granularity: Granularity,
    /// Store version the run was computed against.
    pub snapshot_version: u64,
    pub pairing: PairingOutcome,
    pub summaries: Vec<TrendSummary>,
    pub assessments: Vec<RiskAssessment>,
    pub meal_assessments: Vec<MealRiskAssessment>,
    pub recommendations: Recommendations,
    pub genetic_profile_used: bool,
    pub activity_level: Option<ActivityLevel>,
    /// Genetic risk after the activity multiplier. `None` without a profile.
    pub adjusted_genetic_risk: Option<f64>,
}

impl AnalysisReport {
    /// True when no meal could be paired.
    pub fn is_empty(&self) -> bool {
        self.pairing.paired == 0
    }

    /// Highest tier across all periods.
    pub fn max_tier(&self) -> Option<RiskTier> {
        self.assessments.iter().map(|a| a.tier).max()
    }

    /// JSON form handed to export and rendering collaborators.
    pub fn to_json_pretty(&self) -> GlycoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_value(&self) -> GlycoResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

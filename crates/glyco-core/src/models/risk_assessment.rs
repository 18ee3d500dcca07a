use std::fmt;

use serde::{Deserialize, Serialize};

use super::TrendSummary;

/// Ordinal risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
            RiskTier::Severe => "severe",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Each weighted term of a composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Normalized mean spike magnitude, before weighting.
    pub spike_term: f64,
    /// High-spike ratio, before weighting.
    pub high_spike_ratio_term: f64,
    /// Genetic risk score scaled by the activity multiplier and clamped to
    /// [0, 1]. 0.0 without a profile.
    pub genetic_term: f64,
    /// Multiplier applied to the genetic risk score. 1.0 when no profile or
    /// no activity level was given.
    pub activity_multiplier: f64,
    /// Effective weights after any redistribution. They sum to 1.
    pub spike_weight: f64,
    pub high_spike_ratio_weight: f64,
    pub genetic_weight: f64,
    pub composite: f64,
}

impl ScoreBreakdown {
    pub fn weight_sum(&self) -> f64 {
        self.spike_weight + self.high_spike_ratio_weight + self.genetic_weight
    }
}

/// Composite risk for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub period: TrendSummary,
    pub composite_score: f64,
    pub tier: RiskTier,
    pub breakdown: ScoreBreakdown,
}

/// Composite risk for a single meal, scored as a one-sample period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRiskAssessment {
    pub meal_id: String,
    pub meal_name: String,
    pub delta: i64,
    pub composite_score: f64,
    pub tier: RiskTier,
}

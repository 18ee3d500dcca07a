use glyco_core::config::TierThresholds;
use glyco_core::models::RiskTier;

/// Map a composite score onto a tier. Each threshold is the inclusive lower
/// bound of its tier.
pub fn classify(score: f64, thresholds: &TierThresholds) -> RiskTier {
    if score >= thresholds.severe {
        RiskTier::Severe
    } else if score >= thresholds.high {
        RiskTier::High
    } else if score >= thresholds.moderate {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

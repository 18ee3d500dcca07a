//! General dietary advice, independent of individual meals.

use glyco_core::models::{ActivityLevel, RiskTier};

const REDUCE_CARBS: &str = "Consider reducing carbohydrate intake, especially refined carbs";
const FIBER_AND_PROTEIN: &str = "Increase consumption of fiber-rich vegetables and lean proteins";
const MONITOR_CARBS: &str = "Monitor your carbohydrate intake and meal timing";
const OMEGA_3: &str = "Include more omega-3 rich foods like fish and nuts";
const MAINTAIN: &str = "Maintain current healthy eating patterns";
const MOVE_AFTER_MEALS: &str =
    "Incorporate light physical activity after meals to help manage blood sugar";
const SEEK_ADVICE: &str = "Given your genetic risk factors, consider consulting with a healthcare provider about personalized dietary strategies";

/// Advice lines for the highest tier seen. Nothing for `None` (no data).
pub fn for_tier(tier: Option<RiskTier>) -> Vec<&'static str> {
    match tier {
        Some(RiskTier::Severe | RiskTier::High) => vec![REDUCE_CARBS, FIBER_AND_PROTEIN],
        Some(RiskTier::Moderate) => vec![MONITOR_CARBS, OMEGA_3],
        Some(RiskTier::Low) => vec![MAINTAIN],
        None => Vec::new(),
    }
}

/// Tier advice, then lifestyle and genetic notes. Order is fixed.
pub fn compose(
    tier: Option<RiskTier>,
    activity: Option<ActivityLevel>,
    adjusted_genetic_risk: Option<f64>,
    genetic_advice_threshold: f64,
) -> Vec<String> {
    let mut lines = for_tier(tier);
    if activity.is_some_and(|a| a.is_low()) {
        lines.push(MOVE_AFTER_MEALS);
    }
    if adjusted_genetic_risk.is_some_and(|r| r > genetic_advice_threshold) {
        lines.push(SEEK_ADVICE);
    }
    lines.into_iter().map(String::from).collect()
}

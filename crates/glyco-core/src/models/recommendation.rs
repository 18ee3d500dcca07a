use std::fmt;

use serde::{Deserialize, Serialize};

/// Bucketed macro-nutrient composition, in rounded grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MacroSignature {
    pub carbs: u32,
    pub protein: u32,
    pub fat: u32,
}

impl fmt::Display for MacroSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "carbs~{}g/protein~{}g/fat~{}g", self.carbs, self.protein, self.fat)
    }
}

/// A bucket of similar meals and the spikes they produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPattern {
    pub signature: MacroSignature,
    pub mean_delta: f64,
    pub sample_count: usize,
    /// Distinct meal names in the bucket, sorted, capped.
    pub example_meals: Vec<String>,
}

/// Avoid/prefer patterns plus general advice for the overall risk tier.
///
/// Both pattern lists are empty when no bucket has enough samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Worst patterns first.
    pub avoid: Vec<MealPattern>,
    /// Best patterns first.
    pub prefer: Vec<MealPattern>,
    /// General dietary advice keyed to the highest tier, activity level and
    /// adjusted genetic risk.
    #[serde(default)]
    pub guidance: Vec<String>,
}

impl Recommendations {
    /// True when no macro pattern qualified. Guidance is not considered.
    pub fn is_empty(&self) -> bool {
        self.avoid.is_empty() && self.prefer.is_empty()
    }
}

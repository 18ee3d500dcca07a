use std::collections::BTreeSet;

use serde::Serialize;

use crate::errors::ValidationError;

/// Static genetic-risk profile.
///
/// Loaded once and passed explicitly into scoring. Scoring without a profile
/// is valid and falls back to spike-only weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneticProfile {
    risk_score: f64,
    markers: BTreeSet<String>,
    family_history: bool,
}

impl GeneticProfile {
    pub fn new<I, S>(risk_score: f64, markers: I, family_history: bool) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !(0.0..=1.0).contains(&risk_score) {
            return Err(ValidationError::RiskScoreOutOfRange { value: risk_score });
        }
        Ok(Self {
            risk_score,
            markers: markers.into_iter().map(Into::into).collect(),
            family_history,
        })
    }

    /// Risk score in [0, 1].
    pub fn risk_score(&self) -> f64 {
        self.risk_score
    }

    pub fn markers(&self) -> &BTreeSet<String> {
        &self.markers
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    pub fn family_history(&self) -> bool {
        self.family_history
    }
}

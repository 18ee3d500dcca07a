mod activity_level;
mod genetic_profile;
mod meal;
mod reading;
mod recommendation;
mod risk_assessment;
mod spike_event;
mod trend_summary;

pub use activity_level::ActivityLevel;
pub use genetic_profile::GeneticProfile;
pub use meal::{Macronutrients, Meal};
pub use reading::{GlucoseReading, Phase, StoredReading};
pub use recommendation::{MacroSignature, MealPattern, Recommendations};
pub use risk_assessment::{MealRiskAssessment, RiskAssessment, RiskTier, ScoreBreakdown};
pub use spike_event::SpikeEvent;
pub use trend_summary::{Granularity, TrendSummary};

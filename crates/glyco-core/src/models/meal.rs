use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Macro-nutrient content of a meal, in grams.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macronutrients {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl Macronutrients {
    pub fn new(carbs: f64, protein: f64, fat: f64) -> Self {
        Self {
            carbs,
            protein,
            fat,
        }
    }

    /// Every field must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("carbs", self.carbs),
            ("protein", self.protein),
            ("fat", self.fat),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteMacro { field });
            }
            if value < 0.0 {
                return Err(ValidationError::NegativeMacro { field, value });
            }
        }
        Ok(())
    }
}

/// A recorded meal. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    id: String,
    name: String,
    #[serde(flatten)]
    macros: Macronutrients,
    timestamp: DateTime<Utc>,
}

impl Meal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        macros: Macronutrients,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyMealId);
        }
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyMealName);
        }
        macros.validate()?;
        Ok(Self {
            id,
            name,
            macros,
            timestamp,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn macros(&self) -> Macronutrients {
        self.macros
    }

    pub fn carbs(&self) -> f64 {
        self.macros.carbs
    }

    pub fn protein(&self) -> f64 {
        self.macros.protein
    }

    pub fn fat(&self) -> f64 {
        self.macros.fat
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

//! Ingestion boundary: raw, already-deserialized records in; validated
//! entities out. Nothing past this module sees an untyped record.
//!
//! Field names here are the contract the external loader must honor.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use glyco_core::errors::{GlycoResult, ValidationError};
use glyco_core::models::{ActivityLevel, GeneticProfile, GlucoseReading, Macronutrients, Meal, Phase};

/// Naive formats accepted when a timestamp carries no offset. Read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A meal as delivered by the loader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMeal {
    /// Generated (UUID v4) when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub timestamp: String,
}

impl RawMeal {
    pub fn validate(self) -> Result<Meal, ValidationError> {
        let timestamp = parse_timestamp(&self.timestamp)?;
        let id = self
            .id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        Meal::new(
            id,
            self.name,
            Macronutrients::new(self.carbs, self.protein, self.fat),
            timestamp,
        )
    }
}

/// A glucose reading as delivered by the loader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawReading {
    pub value: i64,
    pub phase: String,
    pub timestamp: String,
}

impl RawReading {
    pub fn validate(self) -> Result<GlucoseReading, ValidationError> {
        let phase = Phase::parse(&self.phase)?;
        let timestamp = parse_timestamp(&self.timestamp)?;
        GlucoseReading::new(self.value, phase, timestamp)
    }
}

/// Genetic data as delivered by the loader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawGeneticProfile {
    pub alzheimer_risk_score: f64,
    #[serde(default)]
    pub genetic_markers: Vec<String>,
    #[serde(default)]
    pub family_history: bool,
}

impl RawGeneticProfile {
    pub fn validate(self) -> Result<GeneticProfile, ValidationError> {
        GeneticProfile::new(
            self.alzheimer_risk_score,
            self.genetic_markers,
            self.family_history,
        )
    }
}

/// Everything one load produces.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawBatch {
    #[serde(default)]
    pub meals: Vec<RawMeal>,
    #[serde(default)]
    pub readings: Vec<RawReading>,
    #[serde(default)]
    pub genetic_profile: Option<RawGeneticProfile>,
    /// One of sedentary, light, moderate or active.
    #[serde(default)]
    pub activity_level: Option<String>,
}

impl RawBatch {
    /// Decode a batch from a JSON document.
    pub fn from_json(json: &str) -> GlycoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// What a committed batch contained.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestReport {
    pub meals: usize,
    pub readings: usize,
    /// Validated profile, if the batch carried one. The store does not keep
    /// it; callers pass it to scoring explicitly.
    pub genetic_profile: Option<GeneticProfile>,
    /// Parsed activity level, passed to scoring the same way.
    pub activity_level: Option<ActivityLevel>,
}

/// Parse an RFC 3339 timestamp, or a naive ISO-8601 one read as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = value.trim();
    let rfc_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ValidationError::MalformedTimestamp {
            value: value.to_string(),
            reason: rfc_err.to_string(),
        })
}

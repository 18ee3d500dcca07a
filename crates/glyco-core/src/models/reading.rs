use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Whether a reading was taken before or after a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Before,
    After,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::After => "after",
        }
    }

    /// Parse a phase name, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "before" => Ok(Phase::Before),
            "after" => Ok(Phase::After),
            _ => Err(ValidationError::UnknownPhase {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single blood-glucose measurement in mg/dL. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlucoseReading {
    value: u32,
    phase: Phase,
    timestamp: DateTime<Utc>,
}

impl GlucoseReading {
    /// Build a reading, rejecting non-positive values.
    pub fn new(value: i64, phase: Phase, timestamp: DateTime<Utc>) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NonPositiveGlucose { value });
        }
        let value = u32::try_from(value).map_err(|_| ValidationError::GlucoseOutOfRange { value })?;
        Ok(Self {
            value,
            phase,
            timestamp,
        })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A reading as held by the store: shared payload plus its insertion sequence.
///
/// `seq` is unique per store and increases with insertion order. It is the
/// reading's identity for tie-breaks and for claiming during pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReading {
    pub seq: u64,
    pub reading: Arc<GlucoseReading>,
}

impl StoredReading {
    pub fn new(seq: u64, reading: GlucoseReading) -> Self {
        Self {
            seq,
            reading: Arc::new(reading),
        }
    }
}

impl Deref for StoredReading {
    type Target = GlucoseReading;

    fn deref(&self) -> &GlucoseReading {
        &self.reading
    }
}

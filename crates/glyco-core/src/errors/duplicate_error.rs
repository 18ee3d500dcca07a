use chrono::{DateTime, Utc};

use crate::models::Phase;

/// Idempotent-ingestion guard errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DuplicateError {
    #[error("a {phase} reading already exists at {timestamp}")]
    Reading {
        timestamp: DateTime<Utc>,
        phase: Phase,
    },

    #[error("meal {id} already exists")]
    Meal { id: String },
}

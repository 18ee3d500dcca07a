mod config_error;
mod duplicate_error;
mod validation_error;

pub use config_error::ConfigError;
pub use duplicate_error::DuplicateError;
pub use validation_error::ValidationError;

/// Top-level error type for the Glyco engine.
///
/// Only ingestion and configuration can fail. Pairing, aggregation, scoring
/// and recommendation are total over validated input.
#[derive(Debug, thiserror::Error)]
pub enum GlycoError {
    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("duplicate record: {0}")]
    DuplicateError(#[from] DuplicateError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("batch {kind} record {index} rejected: {source}")]
    BatchRecordRejected {
        kind: &'static str,
        index: usize,
        #[source]
        source: Box<GlycoError>,
    },

    #[error("reading store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type GlycoResult<T> = Result<T, GlycoError>;

impl GlycoError {
    /// Wrap an error with the kind and position of the batch record that caused it.
    pub fn at_record(kind: &'static str, index: usize, source: impl Into<GlycoError>) -> Self {
        GlycoError::BatchRecordRejected {
            kind,
            index,
            source: Box::new(source.into()),
        }
    }

    /// True when the error (or the record error it wraps) is a duplicate.
    pub fn is_duplicate(&self) -> bool {
        match self {
            GlycoError::DuplicateError(_) => true,
            GlycoError::BatchRecordRejected { source, .. } => source.is_duplicate(),
            _ => false,
        }
    }

    /// True when the error (or the record error it wraps) is a validation failure.
    pub fn is_validation(&self) -> bool {
        match self {
            GlycoError::ValidationError(_) => true,
            GlycoError::BatchRecordRejected { source, .. } => source.is_validation(),
            _ => false,
        }
    }
}

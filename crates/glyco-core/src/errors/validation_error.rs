/// Record validation errors, raised at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("glucose value must be positive, got {value} mg/dL")]
    NonPositiveGlucose { value: i64 },

    #[error("glucose value {value} mg/dL does not fit the reading range")]
    GlucoseOutOfRange { value: i64 },

    #[error("{field} must be non-negative, got {value}")]
    NegativeMacro { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteMacro { field: &'static str },

    #[error("meal name must not be empty")]
    EmptyMealName,

    #[error("meal id must not be empty")]
    EmptyMealId,

    #[error("malformed timestamp {value:?}: {reason}")]
    MalformedTimestamp { value: String, reason: String },

    #[error("unknown reading phase {value:?}, expected \"before\" or \"after\"")]
    UnknownPhase { value: String },

    #[error("unknown activity level {value:?}, expected sedentary, light, moderate or active")]
    UnknownActivityLevel { value: String },

    #[error("genetic risk score must be within [0, 1], got {value}")]
    RiskScoreOutOfRange { value: f64 },

    #[error("spike readings out of order: {reason}")]
    OutOfOrder { reason: String },
}

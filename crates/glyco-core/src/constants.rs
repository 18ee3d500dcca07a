/// Glyco engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of example meal names attached to a recommended pattern.
pub const MAX_PATTERN_EXAMPLES: usize = 3;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "GLYCO_LOG";

//! Tracing setup: subscriber installation, span macros, and event helpers.

pub mod events;
pub mod spans;

use glyco_core::config::ObservabilityConfig;
use glyco_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// The filter comes from `GLYCO_LOG` when set, else from
/// `config.log_level`. Output is JSON lines unless `config.json` is off.
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json)
}

/// Install a JSON subscriber with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), true)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let result = if json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}

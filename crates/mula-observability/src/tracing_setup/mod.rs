//! Tracing setup: structured logging with span definitions and event helpers.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use mula_core::config::ObservabilityConfig;

/// Environment variable holding a full `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "MULA_LOG";

static INIT: Once = Once::new();

/// Build the filter: `MULA_LOG` wins, then `config.log_level`, then `info`.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Idempotent. If another subscriber was installed first (a test harness,
/// an embedding host) this leaves it in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true);

        let installed = if config.json_logs {
            builder
                .with_file(true)
                .with_line_number(true)
                .json()
                .try_init()
        } else {
            builder.try_init()
        };
        if installed.is_err() {
            tracing::debug!("global tracing subscriber already installed");
        }
    });
}

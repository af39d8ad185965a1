//! Telemetry helpers for structured logging and tracing.
//!
//! The dispatch core itself never logs; tracing events come from the
//! builder layer and from applications. This helper only wires up a
//! default subscriber for those.

use tracing_subscriber::EnvFilter;

/// Environment variable read for the log filter, e.g. `deferq=debug`.
pub const LOG_ENV_VAR: &str = "DEFERQ_LOG";

/// Initialize tracing/telemetry. Users can install their own subscriber;
/// this helper installs a default subscriber if none is set, filtered by
/// [`LOG_ENV_VAR`] and falling back to `deferq=info`.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("deferq=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

//! Tests for shared utilities

use deferq::util::{init_tracing, LOG_ENV_VAR};

#[test]
fn test_init_tracing_is_idempotent() {
    // Installing twice must not panic or error; the second call is a no-op.
    init_tracing();
    init_tracing();
}

#[test]
fn test_log_env_var_names_the_crate() {
    assert_eq!(LOG_ENV_VAR, "DEFERQ_LOG");
}

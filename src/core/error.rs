//! Error types for dispatch operations.

use thiserror::Error;

/// Statuses returned by queue and schedule operations.
///
/// None of these are fatal: every resource is pre-allocated at construction,
/// so there is no out-of-memory path after setup and no panic path in the
/// dispatch core. Each status is returned to the immediate caller; the core
/// never retries internally and never logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Push rejected: the queue or schedule is at capacity. State is
    /// unchanged; the caller decides whether to retry, drop, or escalate.
    #[error("queue full")]
    Full,
    /// Pull on an empty queue. A normal steady-state signal, not a failure.
    #[error("queue empty")]
    Empty,
    /// Revoke matched no scheduled entry. No state change.
    #[error("no matching scheduled entry")]
    NotFound,
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;

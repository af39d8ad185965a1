//! Builders to construct queue/schedule pairs from configuration.

use anyhow::anyhow;

use crate::config::DispatchConfig;
use crate::core::{AppResult, BoundedQueue, Consumer, DelayedSchedule};

/// Build a standalone bounded queue from validated configuration.
///
/// # Errors
/// Returns an error if the configuration fails validation.
pub fn build_queue<P>(cfg: &DispatchConfig) -> AppResult<BoundedQueue<P>> {
    cfg.validate().map_err(|e| anyhow!("config invalid: {e}"))?;
    tracing::info!(
        queue_capacity = cfg.queue_capacity,
        "bounded queue constructed"
    );
    Ok(BoundedQueue::new(cfg.queue_capacity))
}

/// Build a delayed schedule bound to a fresh bounded queue, returning the
/// schedule (which owns the producer half) and the consumer half for the
/// dispatch loop.
///
/// # Errors
/// Returns an error if the configuration fails validation.
pub fn build_dispatcher<P>(cfg: &DispatchConfig) -> AppResult<(DelayedSchedule<P>, Consumer<P>)> {
    cfg.validate().map_err(|e| anyhow!("config invalid: {e}"))?;
    let (producer, consumer) = BoundedQueue::new(cfg.queue_capacity).split();
    let schedule = DelayedSchedule::with_policies(
        cfg.schedule_capacity,
        producer,
        cfg.fire_policy,
        cfg.overflow_policy,
    );
    tracing::info!(
        queue_capacity = cfg.queue_capacity,
        schedule_capacity = cfg.schedule_capacity,
        fire_policy = ?cfg.fire_policy,
        overflow_policy = ?cfg.overflow_policy,
        "delayed dispatcher constructed"
    );
    Ok((schedule, consumer))
}

//! Integration tests for the delayed schedule.
//!
//! These validate the tick-driven contract end to end:
//! 1. Entries migrate in ascending due-tick order regardless of push order
//! 2. Revocation before the due tick removes exactly the matching entries
//! 3. Revocation after migration is `NotFound` and cannot stop execution
//! 4. The scheduled-task lifecycle (Scheduled -> Queued -> Running) holds
//!    across the schedule/queue boundary

use std::sync::Arc;

use deferq::core::{
    BoundedQueue, CallableId, DelayedSchedule, DispatchError, Task,
};
use parking_lot::Mutex;

type Log = Arc<Mutex<Vec<u32>>>;

fn record(payload: (Log, u32)) {
    payload.0.lock().push(payload.1);
}

fn record_other(payload: (Log, u32)) {
    payload.0.lock().push(payload.1 + 1000);
}

fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

#[test]
fn test_delays_5_3_4_fire_as_3_4_5() {
    let log = new_log();
    let (producer, mut consumer) = BoundedQueue::new(8).split();
    let mut schedule = DelayedSchedule::new(8, producer);

    schedule
        .push_delayed(Task::unary(record, (Arc::clone(&log), 5)), 5)
        .unwrap();
    schedule
        .push_delayed(Task::unary(record, (Arc::clone(&log), 3)), 3)
        .unwrap();
    schedule
        .push_delayed(Task::unary(record, (Arc::clone(&log), 4)), 4)
        .unwrap();

    let mut fired_at = Vec::new();
    for tick in 1..=6u64 {
        let outcome = schedule.tick();
        for _ in 0..outcome.migrated {
            fired_at.push(tick);
        }
        consumer.pull_all();
    }

    // all three fired before the sixth tick completed, at ticks 3, 4, 5
    assert_eq!(fired_at, vec![3, 4, 5]);
    assert_eq!(log.lock().as_slice(), &[3, 4, 5]);
    assert!(schedule.is_empty());
}

#[test]
fn test_revoke_before_fire_suppresses_execution() {
    let log = new_log();
    let (producer, mut consumer) = BoundedQueue::new(8).split();
    let mut schedule = DelayedSchedule::new(8, producer);

    schedule
        .push_delayed(Task::unary(record, (Arc::clone(&log), 1)), 10)
        .unwrap();
    schedule
        .push_delayed(Task::unary(record_other, (Arc::clone(&log), 2)), 10)
        .unwrap();
    assert_eq!(schedule.len(), 2);

    // revoke the first callable before its due tick; occupancy drops by one
    assert_eq!(schedule.revoke(CallableId::of_unary(record)), Ok(1));
    assert_eq!(schedule.len(), 1);

    // well past tick 10, the revoked task never executes
    for _ in 0..15 {
        schedule.tick();
        consumer.pull_all();
    }
    assert_eq!(log.lock().as_slice(), &[1002]);
}

#[test]
fn test_revoke_after_fire_is_not_found_and_task_still_runs() {
    let log = new_log();
    let (producer, mut consumer) = BoundedQueue::new(8).split();
    let mut schedule = DelayedSchedule::new(8, producer);

    schedule
        .push_delayed(Task::unary(record, (Arc::clone(&log), 7)), 1)
        .unwrap();
    let outcome = schedule.tick();
    assert_eq!(outcome.migrated, 1);

    // already migrated to the immediate queue: immune to revocation
    assert_eq!(
        schedule.revoke(CallableId::of_unary(record)),
        Err(DispatchError::NotFound)
    );

    assert_eq!(consumer.pull_all(), 1);
    assert_eq!(log.lock().as_slice(), &[7]);
}

#[test]
fn test_revoke_matches_identity_not_argument() {
    let log = new_log();
    let (producer, mut consumer) = BoundedQueue::new(8).split();
    let mut schedule = DelayedSchedule::new(8, producer);

    // same callable, three different arguments: all are revoked together
    for tag in [1, 2, 3] {
        schedule
            .push_delayed(Task::unary(record, (Arc::clone(&log), tag)), 5)
            .unwrap();
    }
    schedule
        .push_delayed(Task::unary(record_other, (Arc::clone(&log), 4)), 5)
        .unwrap();

    assert_eq!(schedule.revoke(CallableId::of_unary(record)), Ok(3));
    assert_eq!(schedule.len(), 1);

    for _ in 0..6 {
        schedule.tick();
        consumer.pull_all();
    }
    assert_eq!(log.lock().as_slice(), &[1004]);
}

#[test]
fn test_mixed_immediate_and_delayed_dispatch() {
    let log = new_log();
    let (producer, mut consumer) = BoundedQueue::new(8).split();
    let mut schedule = DelayedSchedule::new(8, producer);

    schedule
        .push_delayed(Task::unary(record, (Arc::clone(&log), 2)), 2)
        .unwrap();
    schedule
        .push_delayed(Task::unary(record, (Arc::clone(&log), 1)), 1)
        .unwrap();

    // nothing runs before its due tick
    assert_eq!(consumer.pull_all(), 0);
    schedule.tick();
    assert_eq!(consumer.pull_all(), 1);
    schedule.tick();
    assert_eq!(consumer.pull_all(), 1);
    assert_eq!(log.lock().as_slice(), &[1, 2]);
}

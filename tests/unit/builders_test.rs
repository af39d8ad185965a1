//! Tests for the dispatcher builders

use deferq::builders::{build_dispatcher, build_queue};
use deferq::config::DispatchConfig;
use deferq::core::{FirePolicy, OverflowPolicy, Task};

fn config(queue_capacity: usize, schedule_capacity: usize) -> DispatchConfig {
    DispatchConfig {
        queue_capacity,
        schedule_capacity,
        fire_policy: FirePolicy::CatchUp,
        overflow_policy: OverflowPolicy::RetryNextTick,
    }
}

#[test]
fn test_build_queue_applies_capacity() {
    let queue = build_queue::<u32>(&config(8, 4)).unwrap();
    assert_eq!(queue.capacity(), 8);
    assert_eq!(queue.usable_capacity(), 7);
}

#[test]
fn test_build_queue_rejects_invalid_config() {
    assert!(build_queue::<u32>(&config(1, 4)).is_err());
}

#[test]
fn test_build_dispatcher_wires_schedule_to_queue() {
    fn mark(_: u8) {}

    let (mut schedule, mut consumer) = build_dispatcher::<u8>(&config(8, 4)).unwrap();
    assert_eq!(schedule.capacity(), 4);

    schedule.push_delayed(Task::unary(mark, 1), 1).unwrap();
    schedule.tick();
    assert_eq!(consumer.pull_all(), 1);
}

#[test]
fn test_build_dispatcher_rejects_invalid_config() {
    assert!(build_dispatcher::<u8>(&config(8, 0)).is_err());
}

//! # deferq
//!
//! Bounded FIFO and tick-delayed dispatch queues for cooperative,
//! interrupt-friendly schedulers.
//!
//! This library decouples *when work is requested* from *when work runs*:
//! producers (timer callbacks, interrupt handlers, application code) enqueue
//! deferred work items, and a single consumer loop drains and executes them
//! later. A companion delayed schedule lets work be queued for a future
//! virtual-time tick and revoked before it fires.
//!
//! ## Core Problem Solved
//!
//! Resource-constrained event loops have different needs than general task
//! runtimes:
//!
//! - **Fixed memory**: every queue and schedule is sized at construction and
//!   never grows; there is no allocation after setup
//! - **Interrupt-friendly producers**: `push` is O(1), never blocks, and
//!   reports `Full` instead of failing non-locally
//! - **Abstract time**: delays are counted in ticks of a caller-driven
//!   virtual clock, not wall-clock time
//! - **One producer, one consumer**: the single-producer/single-consumer
//!   discipline is enforced at the type level, not by convention
//!
//! ## Key Features
//!
//! - **Bounded FIFO queue**: fixed-capacity ring buffer of work items with
//!   strict arrival-order execution
//! - **Delayed schedule**: time-sorted entries that migrate into the FIFO
//!   queue when their due tick arrives
//! - **Revocation**: cancel every pending delayed entry for a callable before
//!   it fires
//! - **Policy-controlled tick semantics**: catch-up vs. strict firing, and
//!   retry vs. drop when the target queue is full
//!
//! ## BoundedQueue - Immediate Dispatch
//!
//! ```rust
//! use deferq::core::{BoundedQueue, Task};
//!
//! fn beep(_count: u32) {}
//!
//! let mut queue = BoundedQueue::new(8);
//! queue.push(Task::unary(beep, 3)).unwrap();
//! let ran = queue.pull_all(); // executes beep(3)
//! assert_eq!(ran, 1);
//! ```
//!
//! ## DelayedSchedule - Tick-Driven Dispatch
//!
//! ```rust
//! use deferq::core::{BoundedQueue, DelayedSchedule, Task};
//!
//! fn blink(_: ()) {}
//!
//! let (producer, mut consumer) = BoundedQueue::new(8).split();
//! let mut schedule = DelayedSchedule::new(4, producer);
//! schedule.push_delayed(Task::unary(blink, ()), 3).unwrap();
//!
//! for _ in 0..3 {
//!     schedule.tick(); // third tick migrates the task into the queue
//! }
//! assert_eq!(consumer.pull_all(), 1);
//! ```
//!
//! For complete examples, see:
//! - `tests/dispatch_test.rs` - FIFO and capacity integration tests
//! - `tests/delayed_test.rs` - tick, revocation, and policy tests

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core dispatch abstractions: tasks, the bounded queue, and the delayed
/// schedule.
pub mod core;
/// Configuration models for queue capacities and tick policies.
pub mod config;
/// Builders to construct dispatcher components from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;

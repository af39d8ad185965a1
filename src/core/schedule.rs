//! Time-sorted delayed schedule feeding a bounded queue on each tick.
//!
//! The schedule holds up to `M` entries, each a task tagged with an absolute
//! due tick, kept sorted ascending by due tick (stable for equal ticks).
//! `tick` advances a virtual clock by exactly one unit and migrates due
//! entries into the producer half of a [`BoundedQueue`] - a move, not a
//! copy. The schedule *has* a queue side; it is not a queue itself
//! (composition, so the queue's push/pull contract stays with the queue).
//!
//! `tick()` must be invoked from a single calling context (typically one
//! periodic timer); concurrent ticks race on the clock and the sorted
//! entries and are not supported.
//!
//! [`BoundedQueue`]: crate::core::BoundedQueue

use serde::{Deserialize, Serialize};

use crate::core::{CallableId, DispatchError, Producer, Task};

/// How `tick` decides which entries are due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirePolicy {
    /// Entries with `due_tick <= virtual_time` fire. Work delayed past its
    /// due tick (e.g. by a full queue) is delivered late rather than lost.
    #[default]
    CatchUp,
    /// Only entries with `due_tick == virtual_time` fire. Entries whose due
    /// tick has already passed are removed and reported as dropped, so they
    /// cannot occupy schedule capacity forever.
    Strict,
}

/// What `tick` does with a due entry when the target queue is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep the entry scheduled and stop migrating for this tick. Under
    /// [`FirePolicy::CatchUp`] the entry fires on a later tick once the
    /// queue drains; under [`FirePolicy::Strict`] it will be stale by then
    /// and dropped instead.
    #[default]
    RetryNextTick,
    /// Remove the entry and report it as dropped, prioritizing forward
    /// progress over lossless delivery.
    DropEntry,
}

/// What a single `tick` call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Entries moved into the bounded queue.
    pub migrated: usize,
    /// Entries removed without running: stale under [`FirePolicy::Strict`],
    /// or displaced by a full queue under [`OverflowPolicy::DropEntry`].
    pub dropped: usize,
}

struct Entry<P> {
    task: Task<P>,
    due_tick: u64,
}

/// Fixed-capacity, time-sorted collection of delayed tasks bound to the
/// producer half of one [`BoundedQueue`].
///
/// Scheduled tasks move through `Free -> Scheduled -> Queued -> Running ->
/// Free`, or are cut short by `Scheduled -> Revoked -> Free`. Once an entry
/// has migrated to the queue it is immune to [`revoke`].
///
/// [`BoundedQueue`]: crate::core::BoundedQueue
/// [`revoke`]: DelayedSchedule::revoke
pub struct DelayedSchedule<P> {
    entries: Vec<Entry<P>>,
    capacity: usize,
    virtual_time: u64,
    fire: FirePolicy,
    overflow: OverflowPolicy,
    producer: Producer<P>,
}

impl<P> DelayedSchedule<P> {
    /// Creates a schedule holding at most `capacity` entries, feeding
    /// `producer`, with default policies ([`FirePolicy::CatchUp`],
    /// [`OverflowPolicy::RetryNextTick`]).
    #[must_use]
    pub fn new(capacity: usize, producer: Producer<P>) -> Self {
        Self::with_policies(
            capacity,
            producer,
            FirePolicy::default(),
            OverflowPolicy::default(),
        )
    }

    /// Creates a schedule with explicit tick policies.
    #[must_use]
    pub fn with_policies(
        capacity: usize,
        producer: Producer<P>,
        fire: FirePolicy,
        overflow: OverflowPolicy,
    ) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            virtual_time: 0,
            fire,
            overflow,
            producer,
        }
    }

    /// Maximum number of scheduled entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently scheduled.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current value of the virtual clock.
    #[must_use]
    pub const fn virtual_time(&self) -> u64 {
        self.virtual_time
    }

    /// Schedules `task` to migrate `delay` ticks from now.
    ///
    /// The due tick is `virtual_time + delay` with wrapping arithmetic;
    /// overflow is accepted, not treated as an error. Insertion keeps the
    /// entries sorted by due tick with a single linear shift; entries with
    /// equal due ticks keep their insertion order.
    ///
    /// # Errors
    /// [`DispatchError::Full`] if the schedule already holds `capacity`
    /// entries; nothing is mutated.
    pub fn push_delayed(&mut self, task: Task<P>, delay: u64) -> Result<(), DispatchError> {
        if self.entries.len() == self.capacity {
            return Err(DispatchError::Full);
        }
        let due_tick = self.virtual_time.wrapping_add(delay);
        let at = self
            .entries
            .iter()
            .position(|e| e.due_tick > due_tick)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, Entry { task, due_tick });
        Ok(())
    }

    /// Removes every scheduled entry whose callable identity matches `id`,
    /// compacting the remainder in order.
    ///
    /// Has no effect on tasks that already migrated to the queue.
    ///
    /// # Errors
    /// [`DispatchError::NotFound`] if no entry matched; otherwise returns
    /// the number of entries removed.
    pub fn revoke(&mut self, id: CallableId) -> Result<usize, DispatchError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.task.identity() != Some(id));
        let removed = before - self.entries.len();
        if removed == 0 {
            return Err(DispatchError::NotFound);
        }
        Ok(removed)
    }

    /// Advances the virtual clock by exactly one unit, then migrates due
    /// entries into the queue in ascending due-tick/insertion order.
    ///
    /// Which entries count as due, and what happens when the queue is full,
    /// are governed by the schedule's [`FirePolicy`] and [`OverflowPolicy`].
    /// Each migration is a move; the schedule retains nothing for a
    /// migrated task.
    pub fn tick(&mut self) -> TickOutcome {
        self.virtual_time = self.virtual_time.wrapping_add(1);
        let mut outcome = TickOutcome::default();

        // Consumed entries are emptied in place and removed with a single
        // drain at the end, so a burst of k due entries costs one tail
        // shift instead of k.
        let mut consumed = 0;
        while consumed < self.entries.len() {
            let due_tick = self.entries[consumed].due_tick;
            if due_tick > self.virtual_time {
                break;
            }
            let stale = due_tick < self.virtual_time;
            if stale && self.fire == FirePolicy::Strict {
                consumed += 1;
                outcome.dropped += 1;
                continue;
            }
            if self.producer.is_full() {
                match self.overflow {
                    OverflowPolicy::RetryNextTick => break,
                    OverflowPolicy::DropEntry => {
                        consumed += 1;
                        outcome.dropped += 1;
                        continue;
                    }
                }
            }
            let task = std::mem::take(&mut self.entries[consumed].task);
            consumed += 1;
            // We are the queue's sole producer and just saw a free slot,
            // so this push cannot race with another fill.
            if self.producer.push(task).is_ok() {
                outcome.migrated += 1;
            } else {
                outcome.dropped += 1;
            }
        }
        self.entries.drain(..consumed);
        outcome
    }
}

//! Fixed-capacity FIFO ring of tasks; the immediate-dispatch surface.
//!
//! The ring disambiguates empty from full with indices alone: empty iff
//! `front == back`, full iff `(back + 1) % N == front`. That convention
//! sacrifices one slot, so a queue of capacity `N` holds at most `N - 1`
//! tasks. Occupancy is always `(back - front + N) % N`.
//!
//! # Concurrency contract
//!
//! Exactly one producer context and one consumer context per queue. The
//! producer owns `back`, the consumer owns `front`; each publishes its index
//! with release ordering and reads the other side with acquire ordering, so
//! the consumer never observes a partially written slot as occupied and the
//! producer never overwrites a slot the consumer has not vacated. Slot
//! contents are handed off under an uncontended per-slot lock.
//!
//! The one-producer/one-consumer constraint is a type-level contract:
//! [`BoundedQueue::split`] yields a non-cloneable [`Producer`] and
//! [`Consumer`] pair, each movable to its own thread. Concurrent pushes from
//! more than one context (or pulls, likewise) require external locking that
//! this module deliberately does not provide.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{DispatchError, RunStatus, Task};

/// Shared ring storage. `front` is consumer-owned, `back` producer-owned.
struct Ring<P> {
    slots: Box<[Mutex<Task<P>>]>,
    front: AtomicUsize,
    back: AtomicUsize,
}

impl<P> Ring<P> {
    fn new(capacity: usize) -> Self {
        assert!(
            capacity >= 2,
            "queue capacity must be at least 2 (usable capacity is capacity - 1)"
        );
        Self {
            slots: (0..capacity).map(|_| Mutex::new(Task::empty())).collect(),
            front: AtomicUsize::new(0),
            back: AtomicUsize::new(0),
        }
    }

    fn push(&self, task: Task<P>) -> Result<(), DispatchError> {
        // Only the producer writes `back`, so a relaxed read of our own
        // index is sufficient; `front` needs acquire to pair with the
        // consumer's release store after it vacates a slot.
        let back = self.back.load(Ordering::Relaxed);
        let front = self.front.load(Ordering::Acquire);
        let next = (back + 1) % self.slots.len();
        if next == front {
            return Err(DispatchError::Full);
        }
        *self.slots[back].lock() = task;
        self.back.store(next, Ordering::Release);
        Ok(())
    }

    fn pull(&self) -> Result<RunStatus, DispatchError> {
        let front = self.front.load(Ordering::Relaxed);
        let back = self.back.load(Ordering::Acquire);
        if front == back {
            return Err(DispatchError::Empty);
        }
        let status = {
            let mut slot = self.slots[front].lock();
            let status = slot.run();
            slot.reset();
            status
        };
        // Publish the vacated slot only after the task has fully run and
        // the slot is cleared.
        self.front
            .store((front + 1) % self.slots.len(), Ordering::Release);
        Ok(status)
    }

    fn len(&self) -> usize {
        let n = self.slots.len();
        let back = self.back.load(Ordering::Acquire);
        let front = self.front.load(Ordering::Acquire);
        (back + n - front) % n
    }

    /// Producer-side full check; callers must be the producer context.
    fn is_full(&self) -> bool {
        let back = self.back.load(Ordering::Relaxed);
        let front = self.front.load(Ordering::Acquire);
        (back + 1) % self.slots.len() == front
    }
}

/// Fixed-capacity circular buffer of [`Task`]s with strict FIFO execution.
///
/// Usable capacity is `capacity - 1`; see the module docs for why. All
/// operations are O(1), return synchronously with a status, and never block.
pub struct BoundedQueue<P> {
    ring: Arc<Ring<P>>,
}

impl<P> BoundedQueue<P> {
    /// Creates a queue with `capacity` slots, of which `capacity - 1` are
    /// usable.
    ///
    /// # Panics
    /// Panics if `capacity < 2`; a two-index ring with fewer slots cannot
    /// hold anything. Use [`DispatchConfig::validate`] to reject such values
    /// before construction.
    ///
    /// [`DispatchConfig::validate`]: crate::config::DispatchConfig::validate
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: Arc::new(Ring::new(capacity)),
        }
    }

    /// Total slot count `N` fixed at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ring.slots.len()
    }

    /// Maximum number of tasks the queue can hold at once (`N - 1`).
    #[must_use]
    pub fn usable_capacity(&self) -> usize {
        self.ring.slots.len() - 1
    }

    /// Current occupancy.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// True iff no tasks are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    /// Enqueues `task` at the back.
    ///
    /// # Errors
    /// [`DispatchError::Full`] if the queue is at usable capacity; the queue
    /// is left unchanged (no partial write).
    pub fn push(&mut self, task: Task<P>) -> Result<(), DispatchError> {
        self.ring.push(task)
    }

    /// Runs and removes the task at the front.
    ///
    /// # Errors
    /// [`DispatchError::Empty`] if no task is queued; no side effect.
    pub fn pull(&mut self) -> Result<RunStatus, DispatchError> {
        self.ring.pull()
    }

    /// Pulls until the queue reports empty; returns the number of tasks
    /// that actually ran. Same ordering guarantees as repeated [`pull`].
    ///
    /// [`pull`]: BoundedQueue::pull
    pub fn pull_all(&mut self) -> usize {
        drain(&self.ring)
    }

    /// Splits the queue into its producer and consumer halves.
    ///
    /// Each half is non-cloneable and holds one side of the
    /// single-producer/single-consumer contract; move them to their
    /// respective contexts (e.g. an interrupt handler and a main loop).
    #[must_use]
    pub fn split(self) -> (Producer<P>, Consumer<P>) {
        let ring = self.ring;
        (
            Producer {
                ring: Arc::clone(&ring),
            },
            Consumer { ring },
        )
    }
}

fn drain<P>(ring: &Ring<P>) -> usize {
    let mut ran = 0;
    while let Ok(status) = ring.pull() {
        if status == RunStatus::Ran {
            ran += 1;
        }
    }
    ran
}

/// The push side of a split [`BoundedQueue`]. Exactly one per queue.
pub struct Producer<P> {
    ring: Arc<Ring<P>>,
}

impl<P> Producer<P> {
    /// Enqueues `task` at the back.
    ///
    /// # Errors
    /// [`DispatchError::Full`] if the queue is at usable capacity; the queue
    /// is left unchanged.
    pub fn push(&mut self, task: Task<P>) -> Result<(), DispatchError> {
        self.ring.push(task)
    }

    /// Current occupancy snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// True iff the occupancy snapshot is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    /// True iff a push right now would return [`DispatchError::Full`].
    ///
    /// Only the consumer can change this answer from full to not-full, so
    /// a `false` result stays valid until this producer pushes.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }
}

/// The pull side of a split [`BoundedQueue`]. Exactly one per queue.
pub struct Consumer<P> {
    ring: Arc<Ring<P>>,
}

impl<P> Consumer<P> {
    /// Runs and removes the task at the front.
    ///
    /// # Errors
    /// [`DispatchError::Empty`] if no task is queued; no side effect.
    pub fn pull(&mut self) -> Result<RunStatus, DispatchError> {
        self.ring.pull()
    }

    /// Pulls until the queue reports empty; returns the number of tasks
    /// that actually ran.
    pub fn pull_all(&mut self) -> usize {
        drain(&self.ring)
    }

    /// Current occupancy snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// True iff the occupancy snapshot is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }
}

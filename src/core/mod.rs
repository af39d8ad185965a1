//! Core dispatch abstractions: tasks, the bounded queue, and the delayed
//! schedule.

pub mod error;
pub mod queue;
pub mod schedule;
pub mod task;

pub use error::{AppResult, DispatchError};
pub use queue::{BoundedQueue, Consumer, Producer};
pub use schedule::{DelayedSchedule, FirePolicy, OverflowPolicy, TickOutcome};
pub use task::{CallableId, RunStatus, Task};

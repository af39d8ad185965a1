//! Configuration models for queue capacities and tick policies.

pub mod dispatch;

pub use dispatch::*;

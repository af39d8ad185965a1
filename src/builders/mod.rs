//! Builders to construct dispatcher components from configuration.

pub mod dispatcher;

pub use dispatcher::{build_dispatcher, build_queue};

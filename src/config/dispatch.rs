//! Dispatcher configuration structures.

use serde::{Deserialize, Serialize};

use crate::core::{FirePolicy, OverflowPolicy};

/// Environment variable holding the dispatcher configuration as JSON.
pub const CONFIG_ENV_VAR: &str = "DEFERQ_CONFIG";

/// Configuration for one bounded-queue/delayed-schedule pair.
///
/// The configuration surface is deliberately small: the two capacities and
/// the tick policies. There are no other runtime options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Slot count `N` for the bounded queue; usable capacity is `N - 1`.
    pub queue_capacity: usize,
    /// Maximum number of pending delayed entries.
    pub schedule_capacity: usize,
    /// How `tick` decides which entries are due.
    #[serde(default)]
    pub fire_policy: FirePolicy,
    /// What `tick` does with a due entry when the queue is full.
    #[serde(default)]
    pub overflow_policy: OverflowPolicy,
}

impl DispatchConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns a description of the first invalid field: a queue capacity
    /// below 2 (the ring sacrifices one slot, so nothing would fit) or a
    /// zero-capacity schedule.
    pub fn validate(&self) -> Result<(), String> {
        if self.queue_capacity < 2 {
            return Err("queue_capacity must be at least 2 (usable capacity is one less)".into());
        }
        if self.schedule_capacity == 0 {
            return Err("schedule_capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse a dispatcher configuration from a JSON string and validate.
    ///
    /// # Errors
    /// Returns a parse error description, or a validation error as from
    /// [`DispatchConfig::validate`].
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load the configuration from the [`CONFIG_ENV_VAR`] environment
    /// variable, reading a `.env` file first if one is present.
    ///
    /// # Errors
    /// Returns an error if the variable is unset or its value fails to
    /// parse or validate.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        let raw = std::env::var(CONFIG_ENV_VAR)
            .map_err(|_| format!("{CONFIG_ENV_VAR} is not set"))?;
        Self::from_json_str(&raw)
    }
}


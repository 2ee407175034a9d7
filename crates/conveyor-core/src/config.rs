//! Pipeline configuration and startup validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration inputs for one pipeline run.
///
/// Validation happens before anything is spawned: a bad worker count must
/// surface as an error immediately, not be discovered via a hang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Number of concurrent workers. Must be at least 1.
    pub workers: usize,

    /// Number of tasks to generate. Zero is allowed.
    pub tasks: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("worker count must be at least 1 (a pool with no workers can never drain the queue)")]
    NoWorkers,
}

impl PipelineConfig {
    pub fn new(workers: usize, tasks: usize) -> Self {
        Self { workers, tasks }
    }

    /// Check the configuration is runnable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(())
    }

    /// Channel capacity for both the task queue and the result sink.
    ///
    /// Sized to hold every task of the run so the producer never blocks on a
    /// full queue and workers never block on a full sink. Tokio-style bounded
    /// channels reject zero capacity, hence the floor of 1.
    pub fn channel_capacity(&self) -> usize {
        self.tasks.max(1)
    }
}

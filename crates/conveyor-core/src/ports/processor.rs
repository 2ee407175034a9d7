//! TaskProcessor port: the externally-defined work performed per task.

use async_trait::async_trait;

use crate::domain::Task;

/// Performs the actual work for one task.
///
/// The contract is deliberately narrow:
/// - processing takes a bounded, possibly variable amount of time and always
///   completes (there is no failure path for a task);
/// - implementations may suspend (timers, I/O) but must not hang forever.
///
/// One instance is shared by every worker in the pool, so implementations
/// must be `Send + Sync` and keep any internal state synchronized.
#[async_trait]
pub trait TaskProcessor: Send + Sync {
    async fn process(&self, task: &Task);
}

/// Processor that completes immediately. Useful in tests and as a baseline.
pub struct NoopProcessor;

#[async_trait]
impl TaskProcessor for NoopProcessor {
    async fn process(&self, _task: &Task) {}
}

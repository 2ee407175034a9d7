//! TaskQueue: producer-closed distribution channel for tasks.

use crate::domain::Task;

use super::bounded::Bounded;

/// Bounded FIFO channel of tasks, closed by the producer.
///
/// Tasks leave in submission order across the whole pool; which worker
/// receives which task is unspecified (whichever is next ready to receive).
/// Workers observe end-of-stream as `recv() == None`, never by blocking
/// forever.
pub struct TaskQueue {
    chan: Bounded<Task>,
}

impl TaskQueue {
    /// Capacity should cover the whole run (see
    /// [`PipelineConfig::channel_capacity`](crate::config::PipelineConfig::channel_capacity))
    /// so the producer in practice never waits.
    pub fn new(capacity: usize) -> Self {
        Self {
            chan: Bounded::new("task queue", capacity),
        }
    }

    /// Hand one task to the pool. Waits only if the queue is full.
    ///
    /// Panics if called after `close`.
    pub async fn enqueue(&self, task: Task) {
        self.chan.push(task).await;
    }

    /// Signal that no further tasks will arrive. Call exactly once; a second
    /// close panics.
    pub async fn close(&self) {
        self.chan.close().await;
    }

    /// Receive the next task, or `None` once the queue is closed and drained.
    pub async fn recv(&self) -> Option<Task> {
        self.chan.pop().await
    }

    pub async fn len(&self) -> usize {
        self.chan.len().await
    }

    pub async fn is_closed(&self) -> bool {
        self.chan.is_closed().await
    }
}

//! Event sink that forwards lifecycle events to `tracing`.

use crate::domain::{EventKind, PipelineEvent};
use crate::ports::EventSink;

/// Renders each event as one structured log line.
///
/// Emission is synchronous and cheap; whatever subscriber is installed
/// decides where the lines actually go.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &PipelineEvent) {
        match &event.kind {
            EventKind::PoolStarted { workers } => {
                tracing::info!(workers, "starting worker pool");
            }
            EventKind::TaskEnqueued { task } => {
                tracing::info!(%task, "task added to queue");
            }
            EventKind::QueueClosed => {
                tracing::info!("all tasks added, closing task queue");
            }
            EventKind::WorkerStarted { worker } => {
                tracing::info!(%worker, "worker started");
            }
            EventKind::TaskProcessed {
                worker,
                task,
                nth_for_worker,
            } => {
                tracing::info!(%worker, %task, nth_for_worker, "worker completed task");
            }
            EventKind::WorkerExited { worker, processed } => {
                tracing::info!(%worker, processed, "worker finished");
            }
            EventKind::SinkClosed => {
                tracing::info!("all workers completed, result sink closed");
            }
            EventKind::OutcomeCollected { task, collected } => {
                tracing::info!(%task, collected, "result received");
            }
            EventKind::RunFinished {
                expected,
                collected,
            } => {
                tracing::info!(expected, collected, "processing complete");
            }
            EventKind::ReportFailed { reason } => {
                tracing::error!(%reason, "failed to persist results");
            }
        }
    }
}

//! Dispatcher: owns the channels and drives one full pipeline lifecycle.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::barrier::CompletionBarrier;
use crate::config::PipelineConfig;
use crate::domain::{EventKind, PipelineEvent, Task, TaskOutcome, WorkerId};
use crate::ports::{EventSink, ReportError, ReportWriter, TaskProcessor};
use crate::queue::{ResultSink, TaskQueue};

use super::worker_loop::WorkerPool;

/// Everything one run produced.
pub struct RunReport {
    outcomes: Vec<TaskOutcome>,
    persist_error: Option<ReportError>,
}

impl RunReport {
    /// Outcomes in collection order (arrival order at the sink, which is not
    /// submission order).
    pub fn outcomes(&self) -> &[TaskOutcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<TaskOutcome> {
        self.outcomes
    }

    /// The persistence failure, if the report writer failed. The outcomes
    /// above are complete either way.
    pub fn persist_error(&self) -> Option<&ReportError> {
        self.persist_error.as_ref()
    }

    /// How many outcomes each worker produced.
    pub fn counts_by_worker(&self) -> BTreeMap<WorkerId, u64> {
        let mut counts = BTreeMap::new();
        for outcome in &self.outcomes {
            *counts.entry(outcome.worker()).or_insert(0) += 1;
        }
        counts
    }
}

/// The orchestrator. Construct through
/// [`PipelineBuilder`](super::builder::PipelineBuilder), which validates the
/// configuration first.
pub struct Pipeline {
    config: PipelineConfig,
    processor: Arc<dyn TaskProcessor>,
    events: Arc<dyn EventSink>,
    writer: Arc<dyn ReportWriter>,
}

impl Pipeline {
    pub(super) fn new(
        config: PipelineConfig,
        processor: Arc<dyn TaskProcessor>,
        events: Arc<dyn EventSink>,
        writer: Arc<dyn ReportWriter>,
    ) -> Self {
        Self {
            config,
            processor,
            events,
            writer,
        }
    }

    pub fn config(&self) -> PipelineConfig {
        self.config
    }

    /// Run the pipeline once, in a fixed sequence:
    ///
    /// 1. spawn the pool (every worker registered with the barrier first);
    /// 2. spawn the shutdown monitor;
    /// 3. enqueue tasks 1..=K in order, each enqueue completed and reported
    ///    before the next is attempted, then close the queue;
    /// 4. drain the sink until closed-and-drained, accumulating outcomes in
    ///    arrival order;
    /// 5. hand the unmodified sequence to the report writer.
    ///
    /// Drains exactly K outcomes for any worker count >= 1 and any K >= 0.
    /// A persistence failure is reported in the returned [`RunReport`]; the
    /// outcomes themselves are never lost to it.
    pub async fn run(&self) -> RunReport {
        let PipelineConfig { workers, tasks } = self.config;
        let capacity = self.config.channel_capacity();

        self.events
            .emit(&PipelineEvent::now(EventKind::PoolStarted { workers }));

        let queue = Arc::new(TaskQueue::new(capacity));
        let sink = Arc::new(ResultSink::new(capacity));
        let barrier = Arc::new(CompletionBarrier::new());

        let pool = WorkerPool::spawn(
            workers,
            Arc::clone(&queue),
            Arc::clone(&sink),
            Arc::clone(&self.processor),
            Arc::clone(&barrier),
            Arc::clone(&self.events),
        );

        // Shutdown monitor: waits for the last worker, then performs its one
        // action. The sink's own double-close panic enforces exactly-once.
        let monitor = tokio::spawn({
            let barrier = Arc::clone(&barrier);
            let sink = Arc::clone(&sink);
            let events = Arc::clone(&self.events);
            async move {
                barrier.wait_idle().await;
                sink.close().await;
                events.emit(&PipelineEvent::now(EventKind::SinkClosed));
            }
        });

        for seq in 1..=(tasks as u64) {
            let task = Task::numbered(seq);
            let id = task.id();
            queue.enqueue(task).await;
            self.events
                .emit(&PipelineEvent::now(EventKind::TaskEnqueued { task: id }));
        }

        self.events.emit(&PipelineEvent::now(EventKind::QueueClosed));
        queue.close().await;

        let mut outcomes = Vec::with_capacity(tasks);
        while let Some(outcome) = sink.recv().await {
            self.events
                .emit(&PipelineEvent::now(EventKind::OutcomeCollected {
                    task: outcome.task().id(),
                    collected: outcomes.len() + 1,
                }));
            outcomes.push(outcome);
        }

        if let Err(err) = monitor.await
            && err.is_panic()
        {
            std::panic::resume_unwind(err.into_panic());
        }
        pool.join_all().await;

        self.events
            .emit(&PipelineEvent::now(EventKind::RunFinished {
                expected: tasks,
                collected: outcomes.len(),
            }));

        let persist_error = match self.writer.write_report(&outcomes) {
            Ok(()) => None,
            Err(err) => {
                self.events
                    .emit(&PipelineEvent::now(EventKind::ReportFailed {
                        reason: err.to_string(),
                    }));
                Some(err)
            }
        };

        RunReport {
            outcomes,
            persist_error,
        }
    }
}

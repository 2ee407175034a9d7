//! Worker pool: N concurrent receive-process-send loops.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::barrier::CompletionBarrier;
use crate::domain::{EventKind, PipelineEvent, TaskOutcome, WorkerId};
use crate::ports::{EventSink, TaskProcessor};
use crate::queue::{ResultSink, TaskQueue};

/// Handle over the spawned workers.
///
/// The pool registers every worker with the barrier before any of them runs;
/// by the time this constructor returns, the barrier count is exactly `n` and
/// the shutdown monitor can be started safely.
pub struct WorkerPool {
    joins: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `n` workers (slots numbered 1..=n).
    pub fn spawn(
        n: usize,
        queue: Arc<TaskQueue>,
        sink: Arc<ResultSink>,
        processor: Arc<dyn TaskProcessor>,
        barrier: Arc<CompletionBarrier>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        for _ in 0..n {
            barrier.register();
        }

        let mut joins = Vec::with_capacity(n);
        for slot in 1..=n {
            let worker = WorkerId::new(slot as u64);
            let queue = Arc::clone(&queue);
            let sink = Arc::clone(&sink);
            let processor = Arc::clone(&processor);
            let barrier = Arc::clone(&barrier);
            let events = Arc::clone(&events);

            joins.push(tokio::spawn(async move {
                worker_loop(worker, queue, sink, processor, barrier, events).await;
            }));
        }

        Self { joins }
    }

    /// Wait for every worker task to finish.
    ///
    /// A worker that panicked hit an invariant violation; the panic is
    /// re-raised here so the run fails loudly instead of reporting a
    /// half-trusted result.
    pub async fn join_all(self) {
        for join in self.joins {
            if let Err(err) = join.await
                && err.is_panic()
            {
                std::panic::resume_unwind(err.into_panic());
            }
        }
    }
}

/// One worker: receive until the queue is closed-and-drained, process each
/// task, send exactly one outcome per task, then signal the barrier.
///
/// The per-worker counter is private to this loop; nothing else reads or
/// writes it. The barrier signal is the loop's final side effect, after which
/// the worker takes no further action.
async fn worker_loop(
    worker: WorkerId,
    queue: Arc<TaskQueue>,
    sink: Arc<ResultSink>,
    processor: Arc<dyn TaskProcessor>,
    barrier: Arc<CompletionBarrier>,
    events: Arc<dyn EventSink>,
) {
    events.emit(&PipelineEvent::now(EventKind::WorkerStarted { worker }));

    let mut processed: u64 = 0;
    while let Some(task) = queue.recv().await {
        processed += 1;
        processor.process(&task).await;

        let task_id = task.id();
        let outcome = TaskOutcome::new(worker, task, processed);
        sink.send(outcome).await;

        events.emit(&PipelineEvent::now(EventKind::TaskProcessed {
            worker,
            task: task_id,
            nth_for_worker: processed,
        }));
    }

    events.emit(&PipelineEvent::now(EventKind::WorkerExited { worker, processed }));
    barrier.worker_done();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::impls::MemorySink;
    use crate::ports::processor::NoopProcessor;
    use std::time::Duration;
    use tokio::time::timeout;

    fn wiring(capacity: usize) -> (Arc<TaskQueue>, Arc<ResultSink>, Arc<CompletionBarrier>) {
        (
            Arc::new(TaskQueue::new(capacity)),
            Arc::new(ResultSink::new(capacity)),
            Arc::new(CompletionBarrier::new()),
        )
    }

    #[tokio::test]
    async fn single_worker_drains_queue_with_increasing_counter() {
        let (queue, sink, barrier) = wiring(4);
        let events = Arc::new(MemorySink::default());

        let pool = WorkerPool::spawn(
            1,
            Arc::clone(&queue),
            Arc::clone(&sink),
            Arc::new(NoopProcessor),
            Arc::clone(&barrier),
            events,
        );
        assert_eq!(barrier.live_count(), 1);

        for seq in 1..=4 {
            queue.enqueue(Task::numbered(seq)).await;
        }
        queue.close().await;

        timeout(Duration::from_secs(1), barrier.wait_idle())
            .await
            .expect("worker must exit once the queue is drained");
        pool.join_all().await;

        sink.close().await;
        let mut nths = Vec::new();
        while let Some(outcome) = sink.recv().await {
            assert_eq!(outcome.worker(), WorkerId::new(1));
            nths.push(outcome.nth_for_worker());
        }
        assert_eq!(nths, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn workers_on_an_empty_closed_queue_exit_with_zero_processed() {
        let (queue, sink, barrier) = wiring(1);
        let events = Arc::new(MemorySink::default());

        let pool = WorkerPool::spawn(
            3,
            Arc::clone(&queue),
            Arc::clone(&sink),
            Arc::new(NoopProcessor),
            Arc::clone(&barrier),
            Arc::clone(&events) as Arc<dyn EventSink>,
        );
        queue.close().await;

        timeout(Duration::from_secs(1), barrier.wait_idle())
            .await
            .unwrap();
        pool.join_all().await;

        let exits: Vec<u64> = events
            .snapshot()
            .into_iter()
            .filter_map(|event| match event.kind {
                EventKind::WorkerExited { processed, .. } => Some(processed),
                _ => None,
            })
            .collect();
        assert_eq!(exits, vec![0, 0, 0]);
        assert_eq!(sink.len().await, 0);
    }

    #[tokio::test]
    async fn pool_registers_before_any_worker_runs() {
        let (queue, sink, barrier) = wiring(1);

        let _pool = WorkerPool::spawn(
            5,
            queue,
            sink,
            Arc::new(NoopProcessor),
            Arc::clone(&barrier),
            Arc::new(crate::ports::NullSink),
        );

        // Synchronously after spawn the whole pool is registered, whether or
        // not any worker task has been polled yet.
        assert_eq!(barrier.live_count(), 5);
    }
}

//! Pipeline lifecycle events.
//!
//! Events are emitted synchronously at fixed points of a run and handed to an
//! [`EventSink`](crate::ports::EventSink). They exist for observers; nothing
//! in the coordination logic reads them back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TaskId, WorkerId};

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// The worker pool was started with this many workers.
    PoolStarted { workers: usize },

    /// One task was accepted by the queue.
    TaskEnqueued { task: TaskId },

    /// The producer side finished; no further tasks will arrive.
    QueueClosed,

    /// A worker began its receive loop.
    WorkerStarted { worker: WorkerId },

    /// A worker completed one task; `nth_for_worker` is its private counter.
    TaskProcessed {
        worker: WorkerId,
        task: TaskId,
        nth_for_worker: u64,
    },

    /// A worker observed the queue closed-and-drained and exited.
    WorkerExited { worker: WorkerId, processed: u64 },

    /// All workers have exited; the result sink was closed.
    SinkClosed,

    /// The dispatcher collected one outcome; `collected` is the running total.
    OutcomeCollected { task: TaskId, collected: usize },

    /// The run finished draining.
    RunFinished { expected: usize, collected: usize },

    /// The report writer failed; the outcomes themselves are unaffected.
    ReportFailed { reason: String },
}

/// A lifecycle event with its wall-clock timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEvent {
    pub at: DateTime<Utc>,
    pub kind: EventKind,
}

impl PipelineEvent {
    /// Stamp `kind` with the current time.
    pub fn now(kind: EventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_roundtrip_json() {
        let event = PipelineEvent::now(EventKind::TaskProcessed {
            worker: WorkerId::new(1),
            task: TaskId::new(4),
            nth_for_worker: 2,
        });

        let s = serde_json::to_string(&event).unwrap();
        let back: PipelineEvent = serde_json::from_str(&s).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn events_are_stamped() {
        let before = Utc::now();
        let event = PipelineEvent::now(EventKind::QueueClosed);
        let after = Utc::now();

        assert!(event.at >= before);
        assert!(event.at <= after);
    }
}

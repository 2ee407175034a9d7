//! ResultSink: aggregation channel from the pool to the dispatcher.

use crate::domain::TaskOutcome;

use super::bounded::Bounded;

/// Bounded FIFO channel of task outcomes.
///
/// Workers send; the dispatcher is the single consumer. The sink is closed by
/// the shutdown monitor once every worker has exited, so a send can never
/// race a close. If one does, the coordination contract is broken and the
/// send panics rather than losing the outcome silently.
pub struct ResultSink {
    chan: Bounded<TaskOutcome>,
}

impl ResultSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            chan: Bounded::new("result sink", capacity),
        }
    }

    /// Deliver one outcome. Waits only if the sink is full.
    ///
    /// Panics if the sink is already closed.
    pub async fn send(&self, outcome: TaskOutcome) {
        self.chan.push(outcome).await;
    }

    /// Close the sink. Call exactly once, and only after every worker has
    /// exited; a second close panics.
    pub async fn close(&self) {
        self.chan.close().await;
    }

    /// Receive the next outcome in arrival order, or `None` once the sink is
    /// closed and drained.
    pub async fn recv(&self) -> Option<TaskOutcome> {
        self.chan.pop().await
    }

    pub async fn len(&self) -> usize {
        self.chan.len().await
    }

    pub async fn is_closed(&self) -> bool {
        self.chan.is_closed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, WorkerId};

    fn outcome(worker: u64, task_seq: u64, nth: u64) -> TaskOutcome {
        TaskOutcome::new(WorkerId::new(worker), Task::numbered(task_seq), nth)
    }

    #[tokio::test]
    async fn outcomes_arrive_in_send_order() {
        let sink = ResultSink::new(4);
        sink.send(outcome(1, 1, 1)).await;
        sink.send(outcome(2, 2, 1)).await;
        assert_eq!(sink.len().await, 2);
        sink.close().await;
        assert!(sink.is_closed().await);

        assert_eq!(sink.recv().await.unwrap().task().id().seq(), 1);
        assert_eq!(sink.recv().await.unwrap().task().id().seq(), 2);
        assert_eq!(sink.recv().await, None);
    }

    #[tokio::test]
    #[should_panic(expected = "result sink: push after close")]
    async fn send_on_closed_sink_is_fatal() {
        let sink = ResultSink::new(1);
        sink.close().await;
        sink.send(outcome(1, 1, 1)).await;
    }

    #[tokio::test]
    #[should_panic(expected = "result sink: closed twice")]
    async fn double_close_is_fatal() {
        let sink = ResultSink::new(1);
        sink.close().await;
        sink.close().await;
    }
}

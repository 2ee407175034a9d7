//! CompletionBarrier: countdown of live workers that gates sink shutdown.

use tokio::sync::watch;

/// Tracks how many workers are still running.
///
/// Usage contract:
/// - `register()` once per worker, before that worker is spawned. The pool
///   registers the whole group before the shutdown monitor is started, so
///   the barrier cannot release before all workers exist.
/// - `worker_done()` exactly once per worker, as its last action. Releasing
///   more times than registered is a coordination bug and panics.
/// - `wait_idle()` resolves once the live count reaches zero. The shutdown
///   monitor follows it with its single action: closing the result sink.
///
/// Built on a `watch` channel: the count lives inside the sender and every
/// waiter observes the same zero transition, with no lost-wakeup window
/// between checking the count and going to sleep.
pub struct CompletionBarrier {
    live: watch::Sender<usize>,
}

impl CompletionBarrier {
    pub fn new() -> Self {
        let (live, _) = watch::channel(0);
        Self { live }
    }

    /// Record one more live worker.
    pub fn register(&self) {
        self.live.send_modify(|n| *n += 1);
    }

    /// Record one worker exit.
    pub fn worker_done(&self) {
        self.live.send_modify(|n| {
            if *n == 0 {
                panic!("completion barrier: released more times than registered (coordination bug)");
            }
            *n -= 1;
        });
    }

    /// Wait until every registered worker has signalled done.
    ///
    /// Resolves immediately if the count is already zero, so callers must
    /// register the full pool first.
    pub async fn wait_idle(&self) {
        let mut rx = self.live.subscribe();
        rx.wait_for(|live| *live == 0)
            .await
            .expect("watch sender lives as long as the barrier");
    }

    /// Current number of live workers.
    pub fn live_count(&self) -> usize {
        *self.live.borrow()
    }
}

impl Default for CompletionBarrier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn releases_only_after_every_worker_is_done() {
        let barrier = Arc::new(CompletionBarrier::new());
        barrier.register();
        barrier.register();

        let waiter = tokio::spawn({
            let barrier = Arc::clone(&barrier);
            async move { barrier.wait_idle().await }
        });

        barrier.worker_done();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished(), "one worker is still live");

        barrier.worker_done();
        timeout(Duration::from_secs(1), waiter)
            .await
            .expect("barrier must release once the count hits zero")
            .unwrap();
        assert_eq!(barrier.live_count(), 0);
    }

    #[tokio::test]
    async fn every_waiter_observes_the_release() {
        let barrier = Arc::new(CompletionBarrier::new());
        barrier.register();

        let waiters: Vec<_> = (0..3)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                tokio::spawn(async move { barrier.wait_idle().await })
            })
            .collect();

        barrier.worker_done();
        for waiter in waiters {
            timeout(Duration::from_secs(1), waiter)
                .await
                .unwrap()
                .unwrap();
        }
    }

    #[tokio::test]
    async fn concurrent_done_signals_are_all_counted() {
        let barrier = Arc::new(CompletionBarrier::new());
        for _ in 0..8 {
            barrier.register();
        }

        let mut signals = Vec::new();
        for _ in 0..8 {
            let barrier = Arc::clone(&barrier);
            signals.push(tokio::spawn(async move { barrier.worker_done() }));
        }
        for signal in signals {
            signal.await.unwrap();
        }

        timeout(Duration::from_secs(1), barrier.wait_idle())
            .await
            .unwrap();
        assert_eq!(barrier.live_count(), 0);
    }

    #[tokio::test]
    #[should_panic(expected = "released more times than registered")]
    async fn underflow_panics() {
        let barrier = CompletionBarrier::new();
        barrier.worker_done();
    }
}

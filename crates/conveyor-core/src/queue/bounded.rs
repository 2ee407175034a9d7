//! Bounded FIFO buffer with an explicit close, shared by the task queue and
//! the result sink.
//!
//! Built on `tokio::sync::Mutex` + `Notify`: the lock is held only for the
//! buffer operation itself and released before any notification. Close uses a
//! baton scheme instead of a broadcast: `close()` wakes one parked consumer,
//! and every consumer that observes closed-and-drained wakes the next. With
//! `notify_one` a wakeup issued before the waiter parks is kept as a permit,
//! so the baton is never lost.
//!
//! Consumers must keep calling `pop` until it returns `None`; parked peers
//! are only released as the baton passes.

use std::collections::VecDeque;

use tokio::sync::{Mutex, Notify};

struct Shared<T> {
    buffer: VecDeque<T>,
    closed: bool,
}

pub(crate) struct Bounded<T> {
    name: &'static str,
    capacity: usize,
    state: Mutex<Shared<T>>,
    /// Signalled once per push, and once per observed end-of-stream (baton).
    readable: Notify,
    /// Signalled once per pop.
    writable: Notify,
}

impl<T: Send> Bounded<T> {
    pub(crate) fn new(name: &'static str, capacity: usize) -> Self {
        assert!(capacity > 0, "{name}: capacity must be at least 1");
        Self {
            name,
            capacity,
            state: Mutex::new(Shared {
                buffer: VecDeque::with_capacity(capacity),
                closed: false,
            }),
            readable: Notify::new(),
            writable: Notify::new(),
        }
    }

    /// Append one item, waiting while the buffer is full.
    ///
    /// Panics if the channel is closed: the producer side owns the close, so
    /// a push after close means the coordination contract is already broken.
    pub(crate) async fn push(&self, item: T) {
        loop {
            {
                let mut state = self.state.lock().await;
                if state.closed {
                    panic!("{}: push after close (coordination bug)", self.name);
                }
                if state.buffer.len() < self.capacity {
                    state.buffer.push_back(item);
                    drop(state);
                    self.readable.notify_one();
                    return;
                }
            }
            self.writable.notified().await;
        }
    }

    /// Remove the oldest item, waiting while the buffer is empty and open.
    ///
    /// Returns `None` exactly when the channel is closed and fully drained.
    pub(crate) async fn pop(&self) -> Option<T> {
        loop {
            {
                let mut state = self.state.lock().await;
                if let Some(item) = state.buffer.pop_front() {
                    drop(state);
                    self.writable.notify_one();
                    return Some(item);
                }
                if state.closed {
                    drop(state);
                    // Pass the baton so the next parked consumer also gets to
                    // observe closed-and-drained.
                    self.readable.notify_one();
                    return None;
                }
            }
            self.readable.notified().await;
        }
    }

    /// Mark end-of-stream. Items already buffered remain poppable.
    ///
    /// Panics on a second call: each channel has exactly one closing side,
    /// and a double close means two components believe they own shutdown.
    pub(crate) async fn close(&self) {
        {
            let mut state = self.state.lock().await;
            if state.closed {
                panic!("{}: closed twice (coordination bug)", self.name);
            }
            state.closed = true;
        }
        self.readable.notify_one();
        // A producer still parked on a full buffer at close time is itself a
        // coordination bug; wake it so the push panics instead of hanging.
        self.writable.notify_one();
    }

    /// Number of items currently buffered.
    pub(crate) async fn len(&self) -> usize {
        self.state.lock().await.buffer.len()
    }

    /// Whether `close` has been called.
    pub(crate) async fn is_closed(&self) -> bool {
        self.state.lock().await.closed
    }
}

//! Domain identifiers (strongly-typed IDs).
//!
//! Tasks and workers are both numbered from 1, so a bare `u64` would make it
//! far too easy to hand a worker number to something expecting a task number.
//! A generic `Id<T>` with a phantom marker keeps one implementation while the
//! compiler keeps the two spaces apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Marker trait for each ID type.
///
/// Provides the prefix used by `Display` (e.g. "task-", "worker-").
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// Generic sequence-based ID.
///
/// `T` is `PhantomData`: it costs nothing at runtime but makes `TaskId` and
/// `WorkerId` distinct types at compile time.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    seq: u64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// Create an Id from a 1-based sequence position.
    pub fn new(seq: u64) -> Self {
        Self {
            seq,
            _marker: PhantomData,
        }
    }

    /// The sequence position this ID was created with.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl<T: IdMarker> From<u64> for Id<T> {
    fn from(seq: u64) -> Self {
        Self::new(seq)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.seq)
    }
}

/// Marker type for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskMarker {}

impl IdMarker for TaskMarker {
    fn prefix() -> &'static str {
        "task-"
    }
}

/// Marker type for workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkerMarker {}

impl IdMarker for WorkerMarker {
    fn prefix() -> &'static str {
        "worker-"
    }
}

/// Identifier of a Task (1-based position in submission order).
pub type TaskId = Id<TaskMarker>;

/// Identifier of a Worker (1-based slot in the pool).
pub type WorkerId = Id<WorkerMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let task = TaskId::new(3);
        let worker = WorkerId::new(3);

        assert_eq!(task.seq(), 3);
        assert_eq!(worker.seq(), 3);

        assert_eq!(task.to_string(), "task-3");
        assert_eq!(worker.to_string(), "worker-3");

        // The whole point: you can't accidentally mix these types.
        // (This is a compile-time property, so we just keep it as a comment.)
        // let _: TaskId = worker; // <- does not compile
    }

    #[test]
    fn ids_sort_by_sequence() {
        let a = TaskId::new(1);
        let b = TaskId::new(2);
        let c = TaskId::new(10);

        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn ids_can_be_serialized() {
        let id = TaskId::new(42);

        let serialized = serde_json::to_string(&id).unwrap();
        let deserialized: TaskId = serde_json::from_str(&serialized).unwrap();

        assert_eq!(id, deserialized);
    }

    #[test]
    fn phantom_data_does_not_consume_memory() {
        use std::mem::size_of;

        assert_eq!(size_of::<TaskId>(), size_of::<u64>());
        assert_eq!(size_of::<WorkerId>(), size_of::<u64>());
    }
}

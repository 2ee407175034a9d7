//! Task: the unit of work carried through the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TaskId;

/// A unit of work: an identifier plus an opaque payload label.
///
/// Immutable once created. The queue owns it until it is delivered to exactly
/// one worker; the worker owns it for the duration of processing and then
/// moves it into the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    label: String,
}

impl Task {
    pub fn new(id: TaskId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Build the task at a given 1-based submission position, with the
    /// default label for that position ("Task1", "Task2", ...).
    pub fn numbered(seq: u64) -> Self {
        Self::new(TaskId::new(seq), format!("Task{seq}"))
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}

//! Outcome model: the record a worker produces for each completed task.
//!
//! This module is architecture-agnostic: it does not assume queues, workers,
//! or how outcomes are collected. It only defines the shape of what one
//! completed task looks like after the fact.

use serde::{Deserialize, Serialize};

use super::{Task, WorkerId};

/// The record of one completed task.
///
/// Immutable once created. Ownership moves worker -> sink -> dispatcher.
///
/// `nth_for_worker` is the producing worker's private 1-based counter at the
/// time of completion: worker A's third outcome carries 3 regardless of what
/// any other worker has done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutcome {
    worker: WorkerId,
    task: Task,
    nth_for_worker: u64,
    description: String,
}

impl TaskOutcome {
    /// Build the outcome for `task`, completed as the `nth_for_worker`-th
    /// task of `worker`. The description is derived here and nowhere else.
    pub fn new(worker: WorkerId, task: Task, nth_for_worker: u64) -> Self {
        let description = format!(
            "Worker {} completed {} (Task #{})",
            worker.seq(),
            task.label(),
            nth_for_worker
        );
        Self {
            worker,
            task,
            nth_for_worker,
            description,
        }
    }

    pub fn worker(&self) -> WorkerId {
        self.worker
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn nth_for_worker(&self) -> u64 {
        self.nth_for_worker
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

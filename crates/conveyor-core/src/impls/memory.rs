//! In-memory port implementations for tests and examples.

use std::sync::Mutex;

use crate::domain::{PipelineEvent, TaskOutcome};
use crate::ports::{EventSink, ReportError, ReportWriter};

/// Event sink that records every event it sees, in emission order.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<PipelineEvent>>,
}

impl MemorySink {
    /// Copy of everything emitted so far.
    pub fn snapshot(&self) -> Vec<PipelineEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: &PipelineEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Report writer that keeps each persisted sequence in memory.
#[derive(Default)]
pub struct MemoryReportWriter {
    reports: Mutex<Vec<Vec<TaskOutcome>>>,
}

impl MemoryReportWriter {
    /// Copy of every report written so far (one entry per write call).
    pub fn reports(&self) -> Vec<Vec<TaskOutcome>> {
        self.reports.lock().unwrap().clone()
    }
}

impl ReportWriter for MemoryReportWriter {
    fn write_report(&self, outcomes: &[TaskOutcome]) -> Result<(), ReportError> {
        self.reports.lock().unwrap().push(outcomes.to_vec());
        Ok(())
    }
}

/// Report writer that always fails. Exercises the persistence-failure path.
pub struct FailingReportWriter;

impl ReportWriter for FailingReportWriter {
    fn write_report(&self, _outcomes: &[TaskOutcome]) -> Result<(), ReportError> {
        Err(ReportError::Io(std::io::Error::other("writer unavailable")))
    }
}

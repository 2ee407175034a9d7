//! ReportWriter port: durable persistence of the collected outcomes.

use thiserror::Error;

use crate::domain::TaskOutcome;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to persist report: {0}")]
    Io(#[from] std::io::Error),
}

/// Persists the final outcome sequence in an implementation-defined form.
///
/// The sequence arrives in collection order and must be persisted unmodified.
/// A failure here is an ordinary error for the caller to report; the outcomes
/// themselves are already in memory and are not lost.
pub trait ReportWriter: Send + Sync {
    fn write_report(&self, outcomes: &[TaskOutcome]) -> Result<(), ReportError>;
}

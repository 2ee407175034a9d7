//! PipelineBuilder: construction and wiring, validated before anything runs.

use std::sync::Arc;

use crate::config::{ConfigError, PipelineConfig};
use crate::ports::{EventSink, NullSink, ReportWriter, TaskProcessor};

use super::dispatcher::Pipeline;

/// Assembles a [`Pipeline`] from its collaborators.
///
/// `build()` is the fail-fast gate: an invalid configuration or a missing
/// collaborator is rejected here, before a single task or worker exists.
pub struct PipelineBuilder {
    config: PipelineConfig,
    processor: Option<Arc<dyn TaskProcessor>>,
    events: Arc<dyn EventSink>,
    writer: Option<Arc<dyn ReportWriter>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no task processor was provided")]
    MissingProcessor,

    #[error("no report writer was provided")]
    MissingReportWriter,
}

impl PipelineBuilder {
    /// Start a builder. Events default to the [`NullSink`].
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            processor: None,
            events: Arc::new(NullSink),
            writer: None,
        }
    }

    /// The work performed per task. Required.
    pub fn processor(mut self, processor: Arc<dyn TaskProcessor>) -> Self {
        self.processor = Some(processor);
        self
    }

    /// Where lifecycle events go. Optional.
    pub fn event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    /// Where the final outcome sequence is persisted. Required.
    pub fn report_writer(mut self, writer: Arc<dyn ReportWriter>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Validate and produce the pipeline.
    pub fn build(self) -> Result<Pipeline, BuildError> {
        self.config.validate()?;
        let processor = self.processor.ok_or(BuildError::MissingProcessor)?;
        let writer = self.writer.ok_or(BuildError::MissingReportWriter)?;
        Ok(Pipeline::new(self.config, processor, self.events, writer))
    }
}

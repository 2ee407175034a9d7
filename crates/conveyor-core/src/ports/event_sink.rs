//! EventSink port: where lifecycle events go.

use crate::domain::PipelineEvent;

/// Receives lifecycle events from the pipeline.
///
/// Called synchronously at each lifecycle point. The core does not depend on
/// the sink's latency or success, so implementations should be cheap and must
/// not block; anything slow belongs behind a buffer owned by the sink.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &PipelineEvent);
}

/// Sink that drops every event.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &PipelineEvent) {}
}

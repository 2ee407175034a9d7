//! conveyor-core
//!
//! Coordination core for a bounded producer/worker/collector pipeline:
//! a fixed pool of workers drains a shared task queue, one outcome is emitted
//! per task into a shared result sink, and a completion barrier closes the
//! sink only after every worker has exited. The dispatcher then drains the
//! sink exactly once and hands the sequence to a report writer.
//!
//! # Module layout
//! - **domain**: IDs, tasks, outcomes, lifecycle events
//! - **config**: run configuration + startup validation
//! - **queue**: the two shared channels (task queue, result sink)
//! - **barrier**: live-worker countdown gating sink shutdown
//! - **ports**: trait seams for the work itself, event logging, persistence
//! - **app**: builder, worker pool, dispatcher
//! - **impls**: built-in port implementations (tracing, file report, memory)

pub mod app;
pub mod barrier;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod queue;

pub use app::{BuildError, Pipeline, PipelineBuilder, RunReport};
pub use barrier::CompletionBarrier;
pub use config::{ConfigError, PipelineConfig};
pub use domain::{EventKind, PipelineEvent, Task, TaskId, TaskOutcome, WorkerId};
pub use ports::{EventSink, ReportError, ReportWriter, TaskProcessor};
pub use queue::{ResultSink, TaskQueue};

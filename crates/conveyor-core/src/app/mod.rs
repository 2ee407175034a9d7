//! App layer: wiring and orchestration on top of the queues and the barrier.
//!
//! - **PipelineBuilder**: construction + fail-fast validation
//! - **WorkerPool**: spawns and joins the worker loops
//! - **Pipeline**: the dispatcher driving one full lifecycle
//! - **RunReport**: what a run produced

pub mod builder;
pub mod dispatcher;
pub mod worker_loop;

pub use self::builder::{BuildError, PipelineBuilder};
pub use self::dispatcher::{Pipeline, RunReport};
pub use self::worker_loop::WorkerPool;

//! Queue module: the two shared channels of the pipeline.
//!
//! `TaskQueue` and `ResultSink` are the only shared mutable resources between
//! the dispatcher and the workers (plus the completion barrier); all access
//! goes through their send/receive operations, which synchronize internally.

mod bounded;
mod results;
mod tasks;

pub use results::ResultSink;
pub use tasks::TaskQueue;

//! Built-in implementations of the ports.

pub mod file_report;
pub mod memory;
pub mod tracing_sink;

pub use self::file_report::{FileReportWriter, render_report};
pub use self::memory::{FailingReportWriter, MemoryReportWriter, MemorySink};
pub use self::tracing_sink::TracingSink;

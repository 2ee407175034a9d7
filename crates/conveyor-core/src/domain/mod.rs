//! Domain model (IDs, tasks, outcomes, events).

pub mod events;
pub mod ids;
pub mod outcome;
pub mod task;

pub use self::events::{EventKind, PipelineEvent};
pub use self::ids::{Id, IdMarker, TaskId, WorkerId};
pub use self::outcome::TaskOutcome;
pub use self::task::Task;

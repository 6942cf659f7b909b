pub mod boost;
pub mod sequence;

pub use crate::domain::model::{SequenceContext, SequenceReport, StepResult};
pub use crate::domain::ports::{Announcer, StepAction, TaskExecutor};
pub use crate::utils::error::Result;

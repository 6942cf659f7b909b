pub mod actions;
pub mod task_executor;

pub use actions::{EngageAction, NoopAction};
pub use task_executor::MemoryTaskExecutor;

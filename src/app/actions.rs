use crate::domain::model::SequenceContext;
use crate::domain::ports::{StepAction, TaskExecutor};
use crate::utils::error::{BoostError, Result};

/// 佔位動作：保留程式結構，不執行任何事
#[derive(Debug, Clone)]
pub struct NoopAction {
    name: String,
}

impl NoopAction {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// 以神經晶格同步連接人類記憶
    pub fn connect() -> Self {
        Self::new("connect")
    }

    /// 脈衝星誘導升級人類記憶
    pub fn upgrade() -> Self {
        Self::new("upgrade")
    }

    /// 神經排毒
    pub fn cleanup() -> Self {
        Self::new("cleanup")
    }
}

#[async_trait::async_trait]
impl StepAction for NoopAction {
    async fn perform(&self, context: &SequenceContext) -> Result<()> {
        let previous = context
            .get_previous_step()
            .map(|step| step.label.as_str())
            .unwrap_or("none");
        tracing::debug!(
            "⚪ {} has no work to do (execution: {}, previous step: {})",
            self.name,
            context.execution_id,
            previous
        );
        Ok(())
    }

    fn get_name(&self) -> &str {
        &self.name
    }
}

/// 透過 TaskExecutor 執行任務
pub struct EngageAction<E: TaskExecutor> {
    executor: E,
}

impl<E: TaskExecutor> EngageAction<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait::async_trait]
impl<E: TaskExecutor> StepAction for EngageAction<E> {
    async fn perform(&self, _context: &SequenceContext) -> Result<()> {
        self.executor.engage().map_err(|e| BoostError::StepFailed {
            step: self.get_name().to_string(),
            details: format!("Task executor failed to engage: {}", e),
        })
    }

    fn get_name(&self) -> &str {
        "perform_tasks"
    }
}

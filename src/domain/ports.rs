use crate::domain::model::SequenceContext;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 狀態訊息透過 announcer 輸出，每次呼叫一行
pub trait Announcer: Send + Sync {
    fn announce(&self, line: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait StepAction: Send + Sync {
    async fn perform(&self, context: &SequenceContext) -> Result<()>;

    fn get_name(&self) -> &str;
}

pub trait TaskExecutor: Send + Sync {
    fn engage(&self) -> Result<()>;
}

use crate::domain::ports::TaskExecutor;
use crate::utils::error::Result;

/// 在「Hypercognitive Operations」步驟中被喚起的執行器。
///
/// `engage_hypercognition` 沒有定義任何行為：不輸出任何內容，只留下一筆 debug 紀錄。
#[derive(Debug, Clone, Default)]
pub struct MemoryTaskExecutor;

impl MemoryTaskExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn engage_hypercognition(&self) {
        tracing::debug!("🧠 Hypercognition engaged");
    }
}

impl TaskExecutor for MemoryTaskExecutor {
    fn engage(&self) -> Result<()> {
        self.engage_hypercognition();
        Ok(())
    }
}

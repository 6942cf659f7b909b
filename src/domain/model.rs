use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 單一步驟的執行結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub label: String,
    pub announcement: String,
    pub duration: Duration,
}

/// 步驟間共享的執行上下文
#[derive(Debug, Clone)]
pub struct SequenceContext {
    pub execution_id: String,
    pub completed_steps: Vec<StepResult>,
}

impl SequenceContext {
    pub fn new(execution_id: String) -> Self {
        Self {
            execution_id,
            completed_steps: Vec::new(),
        }
    }

    pub fn get_previous_step(&self) -> Option<&StepResult> {
        self.completed_steps.last()
    }

    pub fn add_result(&mut self, result: StepResult) {
        self.completed_steps.push(result);
    }
}

/// 整個序列的執行報告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceReport {
    pub execution_id: String,
    pub started_at: DateTime<Utc>,
    pub steps: Vec<StepResult>,
    pub total_duration: Duration,
}

impl SequenceReport {
    pub fn step_labels(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.label.as_str()).collect()
    }

    /// 獲取執行摘要
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "execution_id": self.execution_id,
            "total_steps": self.steps.len(),
            "total_duration_ms": self.total_duration.as_millis() as u64,
            "executed_steps": self.step_labels(),
        })
    }
}

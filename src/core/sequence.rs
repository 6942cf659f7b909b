use crate::domain::model::{SequenceContext, SequenceReport, StepResult};
use crate::domain::ports::{Announcer, StepAction};
use crate::utils::error::{BoostError, Result};
use crate::utils::validation::{validate_announcement, validate_unique_labels, Validate};
use chrono::Utc;
use std::time::Instant;

/// 一個「先宣告、後執行」的步驟
pub struct Step {
    pub label: String,
    pub announcement: String,
    action: Box<dyn StepAction>,
}

impl Step {
    pub fn new(label: &str, announcement: &str, action: Box<dyn StepAction>) -> Self {
        Self {
            label: label.to_string(),
            announcement: announcement.to_string(),
            action,
        }
    }

    pub fn action_name(&self) -> &str {
        self.action.get_name()
    }
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("label", &self.label)
            .field("announcement", &self.announcement)
            .field("action", &self.action.get_name())
            .finish()
    }
}

/// 步驟序列執行器：依宣告順序逐一執行步驟
pub struct SequenceRunner<A: Announcer> {
    announcer: A,
    opening: String,
    closing: String,
    steps: Vec<Step>,
    execution_id: String,
}

impl<A: Announcer> SequenceRunner<A> {
    pub fn new(announcer: A, opening: &str, closing: &str) -> Self {
        Self {
            announcer,
            opening: opening.to_string(),
            closing: closing.to_string(),
            steps: Vec::new(),
            execution_id: format!("boost_{}", Utc::now().format("%Y%m%d_%H%M%S")),
        }
    }

    pub fn with_execution_id(mut self, execution_id: String) -> Self {
        self.execution_id = execution_id;
        self
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.add_step(step);
        self
    }

    pub fn add_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    pub fn execution_id(&self) -> &str {
        &self.execution_id
    }

    pub async fn run(&self) -> Result<SequenceReport> {
        self.validate()?;

        let started_at = Utc::now();
        let start_time = Instant::now();
        let mut context = SequenceContext::new(self.execution_id.clone());

        tracing::info!(
            "🚀 Starting sequence {} ({} steps)",
            self.execution_id,
            self.steps.len()
        );

        self.announcer.announce(&self.opening).await?;

        for step in &self.steps {
            let step_start = Instant::now();

            self.announcer.announce(&step.announcement).await?;

            if let Err(e) = step.action.perform(&context).await {
                tracing::error!("❌ Step failed: {} - {}", step.label, e);
                return Err(match e {
                    BoostError::StepFailed { .. } => e,
                    other => BoostError::StepFailed {
                        step: step.label.clone(),
                        details: other.to_string(),
                    },
                });
            }

            let result = StepResult {
                label: step.label.clone(),
                announcement: step.announcement.clone(),
                duration: step_start.elapsed(),
            };
            tracing::debug!(
                "✅ Step completed: {} (action: {}, duration: {:?})",
                result.label,
                step.action_name(),
                result.duration
            );
            context.add_result(result);
        }

        self.announcer.announce(&self.closing).await?;

        let report = SequenceReport {
            execution_id: context.execution_id,
            started_at,
            steps: context.completed_steps,
            total_duration: start_time.elapsed(),
        };
        tracing::info!(
            "🏁 Sequence {} finished ({} steps, {:?})",
            report.execution_id,
            report.steps.len(),
            report.total_duration
        );

        Ok(report)
    }
}

impl<A: Announcer> Validate for SequenceRunner<A> {
    fn validate(&self) -> Result<()> {
        validate_announcement("opening", &self.opening)?;
        validate_announcement("closing", &self.closing)?;
        for (index, step) in self.steps.iter().enumerate() {
            validate_announcement(&format!("steps[{}].announcement", index), &step.announcement)?;
        }
        validate_unique_labels("steps.label", self.steps.iter().map(|s| s.label.as_str()))
    }
}

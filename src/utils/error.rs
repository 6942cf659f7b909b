use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoostError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid sequence field '{field}' (value: {value:?}): {reason}")]
    InvalidSequenceError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Step '{step}' failed: {details}")]
    StepFailed { step: String, details: String },
}

impl BoostError {
    pub fn invalid(field: &str, value: &str, reason: impl Into<String>) -> Self {
        BoostError::InvalidSequenceError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// 是否為設定錯誤（序列在執行前即被拒絕）
    pub fn is_validation_error(&self) -> bool {
        matches!(self, BoostError::InvalidSequenceError { .. })
    }
}

pub type Result<T> = std::result::Result<T, BoostError>;

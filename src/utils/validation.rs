use crate::utils::error::{BoostError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BoostError::invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// 每則訊息必須剛好佔一行輸出
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\n') || value.contains('\r') {
        return Err(BoostError::invalid(
            field_name,
            value,
            "Value must not contain line breaks",
        ));
    }
    Ok(())
}

pub fn validate_announcement(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    validate_single_line(field_name, value)
}

pub fn validate_unique_labels<'a, I>(field_name: &str, labels: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for (index, label) in labels.into_iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}]", field_name, index), label)?;
        if !seen.insert(label) {
            return Err(BoostError::invalid(
                &format!("{}[{}]", field_name, index),
                label,
                "Duplicate step label",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_announcement() {
        assert!(validate_announcement("opening", "Sequence Initiated...").is_ok());
        assert!(validate_announcement("opening", "").is_err());
        assert!(validate_announcement("opening", "   ").is_err());
        assert!(validate_announcement("opening", "two\nlines").is_err());
        assert!(validate_announcement("opening", "carriage\rreturn").is_err());
    }

    #[test]
    fn test_validate_unique_labels() {
        assert!(validate_unique_labels("labels", ["connect", "upgrade", "cleanup"]).is_ok());
        assert!(validate_unique_labels("labels", Vec::<&str>::new()).is_ok());

        let err = validate_unique_labels("labels", ["connect", "upgrade", "connect"]).unwrap_err();
        match err {
            BoostError::InvalidSequenceError { field, value, .. } => {
                assert_eq!(field, "labels[2]");
                assert_eq!(value, "connect");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_unique_labels_rejects_blank() {
        assert!(validate_unique_labels("labels", ["connect", " "]).is_err());
    }
}

use thiserror::Error;

/// First invalid field of a form; forms stop at the first failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label}: {message}")]
pub struct FieldError {
    /// Wire name of the field (camelCase, as sent to the API)
    pub field: &'static str,
    pub label: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn required(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            message: "is required".to_string(),
        }
    }

    pub fn invalid(field: &'static str, label: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            label,
            message: message.into(),
        }
    }
}

/// Check that a text field holds something other than whitespace
pub fn require_text(value: &str, field: &'static str, label: &'static str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::required(field, label));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_blank() {
        let err = require_text("   ", "name", "Firmware name").unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "Firmware name: is required");
        assert!(require_text("v1", "name", "Firmware name").is_ok());
    }
}

use crate::error::AppError;

/// Boundary validation run by the `ValidJson` extractor after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// Reject a required string field that is empty or whitespace-only.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

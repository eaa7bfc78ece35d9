//! Required-field checks shared by the drafts.

use crate::error::ValidationError;

/// Trim `value` and reject it when nothing is left.
pub(crate) fn required_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value)
}

/// Trim an optional text field, collapsing blanks to `None`.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim a field that is already set, rejecting it when nothing is left.
pub(crate) fn trimmed(field: &'static str, value: String) -> Result<String, ValidationError> {
    required_text(field, Some(value))
}

pub(crate) fn check_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

//! Client-side form validation.
//!
//! Run before submission; the server only re-checks presence of the
//! required fields, so length bounds live here.

/// A field-level validation failure, rendered inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be less than {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Validate a project name: required, trimmed length 2..=50.
pub fn project_name(value: &str) -> Result<String, FormError> {
    required_text("Project name", value, 2, 50)
}

/// Validate a project description: optional, at most 200 characters.
pub fn project_description(value: &str) -> Result<String, FormError> {
    bounded_text("Description", value, 200)
}

/// Validate a task title: required, trimmed length 2..=100.
pub fn task_title(value: &str) -> Result<String, FormError> {
    required_text("Task title", value, 2, 100)
}

/// Validate a task description: optional, at most 500 characters.
pub fn task_description(value: &str) -> Result<String, FormError> {
    bounded_text("Description", value, 500)
}

fn required_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<String, FormError> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len == 0 {
        return Err(FormError::Required { field });
    }
    if len < min {
        return Err(FormError::TooShort { field, min });
    }
    if len > max {
        return Err(FormError::TooLong { field, max });
    }
    Ok(trimmed.to_string())
}

fn bounded_text(field: &'static str, value: &str, max: usize) -> Result<String, FormError> {
    if value.chars().count() > max {
        return Err(FormError::TooLong { field, max });
    }
    Ok(value.trim().to_string())
}

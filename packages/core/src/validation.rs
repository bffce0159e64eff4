// ABOUTME: Input validation for todo fields
// ABOUTME: Field-level rules shared by the task store and the HTTP layer

use thiserror::Error;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Title must be at most {0} characters")]
    TitleTooLong(usize),

    #[error("Description must be at most {0} characters")]
    DescriptionTooLong(usize),

    #[error("Category is required")]
    EmptyCategory,
}

/// Validate a todo title. Surrounding whitespace does not count.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::TitleTooLong(MAX_TITLE_LENGTH));
    }
    Ok(())
}

/// Validate an optional description. Blank descriptions are allowed and dropped later.
pub fn validate_description(description: Option<&str>) -> Result<(), ValidationError> {
    match description {
        Some(text) if text.trim().chars().count() > MAX_DESCRIPTION_LENGTH => {
            Err(ValidationError::DescriptionTooLong(MAX_DESCRIPTION_LENGTH))
        }
        _ => Ok(()),
    }
}

/// Validate a category. Any non-blank name is accepted.
pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

/// Truncates a string to a maximum number of characters with ellipsis
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

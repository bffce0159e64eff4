// ABOUTME: Core constants, ID generation, and validation for Taskdeck
// ABOUTME: Foundational package shared by the task store and the HTTP layer

pub mod constants;
pub mod utils;
pub mod validation;

// Re-export constants
pub use constants::{DEFAULT_CATEGORIES, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, TODO_ID_LENGTH};

// Re-export utilities
pub use utils::generate_todo_id;

// Re-export validation
pub use validation::{
    truncate, validate_category, validate_description, validate_title, ValidationError,
};

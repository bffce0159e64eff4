/// Categories offered to callers that do not bring their own set
pub const DEFAULT_CATEGORIES: &[&str] = &["Work", "Personal", "Shopping", "Health", "Learning"];

/// Length of generated todo IDs
pub const TODO_ID_LENGTH: usize = 12;

/// Upper bound on a todo title, in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Upper bound on a todo description, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;

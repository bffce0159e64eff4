// ABOUTME: Todo type definitions
// ABOUTME: Structures for todos, creation/update inputs, filters, and derived stats

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use taskdeck_core::{validate_category, validate_description, validate_title, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Completed,
}

impl TodoStatus {
    pub fn toggled(self) -> Self {
        match self {
            TodoStatus::Pending => TodoStatus::Completed,
            TodoStatus::Completed => TodoStatus::Pending,
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoStatus::Pending => write!(f, "pending"),
            TodoStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TodoStatus::Pending),
            "completed" => Ok(TodoStatus::Completed),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub category: String,
    pub status: TodoStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Todo {
    pub fn is_completed(&self) -> bool {
        self.status == TodoStatus::Completed
    }

    /// Pending with a due date strictly before `now`
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.status == TodoStatus::Pending && self.due_date.is_some_and(|due| due < now)
    }

    /// Moves to `status`, keeping `completed_at` in step with it
    pub(crate) fn set_status(&mut self, status: TodoStatus, now: DateTime<Utc>) {
        if self.status == status {
            return;
        }
        self.status = status;
        self.completed_at = match status {
            TodoStatus::Completed => Some(now),
            TodoStatus::Pending => None,
        };
    }
}

/// Input for creating a todo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoData {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl TodoData {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        TodoData {
            title: title.into(),
            description: None,
            priority: Priority::default(),
            category: category.into(),
            due_date: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        validate_description(self.description.as_deref())?;
        validate_category(&self.category)
    }
}

/// Partial update for an existing todo.
///
/// `description` and `due_date` distinguish an absent key (leave as is) from an
/// explicit `null` (clear). Identity and timestamps are not part of this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TodoUpdate {
    pub fn status(status: TodoStatus) -> Self {
        TodoUpdate {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == TodoUpdate::default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(ref title) = self.title {
            validate_title(title)?;
        }
        if let Some(Some(ref description)) = self.description {
            validate_description(Some(description))?;
        }
        if let Some(ref category) = self.category {
            validate_category(category)?;
        }
        Ok(())
    }
}

/// A present key (even `null`) becomes `Some`; a missing key falls back to `default`
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Criteria for a filtered view. `None` or an empty query bypasses that dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilter {
    pub query: String,
    pub priority: Option<Priority>,
    pub status: Option<TodoStatus>,
    pub category: Option<String>,
}

impl TodoFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        self.matches_query(todo)
            && self.priority.map_or(true, |p| todo.priority == p)
            && self.status.map_or(true, |s| todo.status == s)
            && self
                .category
                .as_deref()
                .map_or(true, |c| todo.category == c)
    }

    fn matches_query(&self, todo: &Todo) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        todo.title.to_lowercase().contains(&needle)
            || todo
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_data_accepts_any_named_category() {
        assert!(TodoData::new("Pick up parcel", "Errands").validate().is_ok());
        assert!(TodoData::new("Standup", "Work").validate().is_ok());
        assert_eq!(
            TodoData::new("Standup", "  ").validate(),
            Err(ValidationError::EmptyCategory)
        );
    }

    #[test]
    fn test_todo_update_validates_only_present_fields() {
        assert!(TodoUpdate::default().validate().is_ok());

        let update = TodoUpdate {
            category: Some("Garden".to_string()),
            ..TodoUpdate::default()
        };
        assert!(update.validate().is_ok());

        let update = TodoUpdate {
            category: Some(String::new()),
            ..TodoUpdate::default()
        };
        assert_eq!(update.validate(), Err(ValidationError::EmptyCategory));
    }
}

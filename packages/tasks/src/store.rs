// ABOUTME: In-memory todo store with CRUD, filtering, and statistics
// ABOUTME: Keeps todos newest-first and the status/completedAt invariant intact

use chrono::{DateTime, Utc};
use taskdeck_core::generate_todo_id;
use thiserror::Error;
use tracing::debug;

use crate::types::{Todo, TodoData, TodoFilter, TodoStats, TodoStatus, TodoUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    NotFound(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

/// Ordered collection of todos, newest first.
///
/// Every mutation either applies fully or returns an error before the
/// collection is touched.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from todos already in newest-first order
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        TodoStore { todos }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn add(&mut self, data: TodoData) -> &Todo {
        self.add_at(data, Utc::now())
    }

    pub fn add_at(&mut self, data: TodoData, now: DateTime<Utc>) -> &Todo {
        let mut id = generate_todo_id();
        while self.get(&id).is_some() {
            id = generate_todo_id();
        }

        let description = data
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let todo = Todo {
            id,
            title: data.title.trim().to_string(),
            description,
            priority: data.priority,
            category: data.category,
            status: TodoStatus::Pending,
            created_at: now,
            completed_at: None,
            due_date: data.due_date,
        };

        debug!("Adding todo {} ({})", todo.id, todo.title);
        self.todos.insert(0, todo);
        &self.todos[0]
    }

    pub fn toggle_status(&mut self, id: &str) -> TodoResult<&Todo> {
        self.toggle_status_at(id, Utc::now())
    }

    pub fn toggle_status_at(&mut self, id: &str, now: DateTime<Utc>) -> TodoResult<&Todo> {
        let todo = self.find_mut(id)?;
        let next = todo.status.toggled();
        todo.set_status(next, now);
        debug!("Toggled todo {} to {}", todo.id, todo.status);
        Ok(todo)
    }

    pub fn delete(&mut self, id: &str) -> TodoResult<Todo> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        Ok(self.todos.remove(index))
    }

    pub fn edit(&mut self, id: &str, update: TodoUpdate) -> TodoResult<&Todo> {
        self.edit_at(id, update, Utc::now())
    }

    pub fn edit_at(&mut self, id: &str, update: TodoUpdate, now: DateTime<Utc>) -> TodoResult<&Todo> {
        let todo = self.find_mut(id)?;

        if let Some(title) = update.title {
            todo.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            todo.description = description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty());
        }
        if let Some(priority) = update.priority {
            todo.priority = priority;
        }
        if let Some(category) = update.category {
            todo.category = category;
        }
        if let Some(due_date) = update.due_date {
            todo.due_date = due_date;
        }
        if let Some(status) = update.status {
            todo.set_status(status, now);
        }

        Ok(todo)
    }

    /// Removes every completed todo and returns how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.is_completed());
        let removed = before - self.todos.len();
        debug!("Cleared {} completed todos", removed);
        removed
    }

    /// Lazily yields the todos matching every criterion, in store order
    pub fn filter<'s: 'f, 'f>(
        &'s self,
        filter: &'f TodoFilter,
    ) -> impl Iterator<Item = &'s Todo> + 'f {
        self.todos.iter().filter(move |t| filter.matches(t))
    }

    pub fn stats(&self) -> TodoStats {
        self.stats_at(Utc::now())
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> TodoStats {
        self.todos
            .iter()
            .fold(TodoStats::default(), |mut stats, todo| {
                stats.total += 1;
                match todo.status {
                    TodoStatus::Completed => stats.completed += 1,
                    TodoStatus::Pending => stats.pending += 1,
                }
                if todo.is_overdue_at(now) {
                    stats.overdue += 1;
                }
                stats
            })
    }

    fn find_mut(&mut self, id: &str) -> TodoResult<&mut Todo> {
        self.todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }
}

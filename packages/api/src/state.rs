// ABOUTME: Shared state for API handlers
// ABOUTME: One in-memory todo store and one chat relay per server process

use std::sync::Arc;

use taskdeck_ai::{ChatProvider, ChatRelay};
use taskdeck_tasks::TodoStore;
use tokio::sync::RwLock;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<RwLock<TodoStore>>,
    pub relay: ChatRelay,
}

impl AppState {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self::with_store(TodoStore::new(), provider)
    }

    pub fn with_store(store: TodoStore, provider: Arc<dyn ChatProvider>) -> Self {
        AppState {
            todos: Arc::new(RwLock::new(store)),
            relay: ChatRelay::new(provider),
        }
    }
}

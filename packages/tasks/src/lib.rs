// ABOUTME: Todo management for Taskdeck
// ABOUTME: Provides the in-memory store, filtering, statistics, and a remote HTTP client

pub mod client;
pub mod store;
pub mod types;

pub use client::{TodoApiClient, TodoClientError, TodoClientResult};
pub use store::{TodoError, TodoResult, TodoStore};
pub use types::*;

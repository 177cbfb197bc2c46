//! Repository port for task persistence and lookup.

use crate::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a task and returns its identifier.
    ///
    /// Never fails on a duplicate identifier: an existing record with the
    /// same identifier is silently replaced. Identifier uniqueness is
    /// guaranteed upstream by the domain constructor.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on backend failure.
    async fn create(&self, task: &Task) -> TaskRepositoryResult<TaskId>;

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has the given
    /// identifier.
    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Task>;

    /// Retrieves the subset of tasks whose identifiers exist, in input
    /// order.
    ///
    /// Identifiers that do not resolve are skipped silently; an entirely
    /// unresolvable input yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on backend failure.
    async fn get_by_ids(&self, ids: &[TaskId]) -> TaskRepositoryResult<Vec<Task>>;

    /// Replaces the stored record with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

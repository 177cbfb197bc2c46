//! Repository port for task-list persistence and membership resolution.

use super::TaskRepositoryError;
use crate::domain::{Task, TaskId, TaskList, TaskListId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task-list repository operations.
pub type TaskListRepositoryResult<T> = Result<T, TaskListRepositoryError>;

/// Task-list persistence contract.
///
/// Implementations resolve list membership through a task repository but
/// treat it strictly as a read dependency: they never create, update, or
/// delete task records.
#[async_trait]
pub trait TaskListRepository: Send + Sync {
    /// Stores a task-list and returns its identifier.
    ///
    /// Never fails on a duplicate identifier: an existing record with the
    /// same identifier is silently replaced.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Persistence`] on backend failure.
    async fn create(&self, list: &TaskList) -> TaskListRepositoryResult<TaskListId>;

    /// Retrieves a task-list by identifier, membership included.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when no list has the
    /// given identifier.
    async fn get_by_id(&self, id: TaskListId) -> TaskListRepositoryResult<TaskList>;

    /// Replaces the stored record with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list does not
    /// exist.
    async fn update(&self, list: &TaskList) -> TaskListRepositoryResult<()>;

    /// Removes a task-list by identifier.
    ///
    /// Member tasks are untouched; the membership simply ceases to exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list does not
    /// exist.
    async fn delete(&self, id: TaskListId) -> TaskListRepositoryResult<()>;

    /// Appends a task identifier to a list's membership.
    ///
    /// The task itself is not checked for existence, so dangling
    /// identifiers can be introduced here.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list does not
    /// exist. A missing task is not an error.
    async fn add_task_to_list(
        &self,
        task_id: TaskId,
        list_id: TaskListId,
    ) -> TaskListRepositoryResult<()>;

    /// Resolves a list's membership into full task records, in membership
    /// order.
    ///
    /// Identifiers that no longer resolve in the task repository are
    /// omitted silently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list does not
    /// exist, or [`TaskListRepositoryError::Tasks`] when the task
    /// repository lookup itself fails.
    async fn get_tasks_by_list(&self, list_id: TaskListId) -> TaskListRepositoryResult<Vec<Task>>;
}

/// Errors returned by task-list repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskListRepositoryError {
    /// The task-list was not found.
    #[error("task list not found: {0}")]
    NotFound(TaskListId),

    /// Membership resolution failed in the task repository.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskListRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

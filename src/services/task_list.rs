//! Service layer for task and task-list use-cases.

use crate::domain::{Task, TaskDomainError, TaskId, TaskList, TaskListId};
use crate::ports::{
    TaskListRepository, TaskListRepositoryError, TaskRepository, TaskRepositoryError,
};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task-list operations.
///
/// Failures propagate unchanged from the layer that produced them; no
/// wrapping or aggregation happens here.
#[derive(Debug, Error)]
pub enum TaskListServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Task-list repository operation failed.
    #[error(transparent)]
    Lists(#[from] TaskListRepositoryError),
}

/// Result type for task-list service operations.
pub type TaskListServiceResult<T> = Result<T, TaskListServiceError>;

/// Orchestrates the task and task-list repositories.
///
/// The service holds no state beyond the injected repositories and clock,
/// and is generic over both ports so either backend can be swapped out
/// independently.
#[derive(Clone)]
pub struct TaskListService<L, T, C>
where
    L: TaskListRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    lists: Arc<L>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<L, T, C> TaskListService<L, T, C>
where
    L: TaskListRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task-list service.
    #[must_use]
    pub const fn new(lists: Arc<L>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            lists,
            tasks,
            clock,
        }
    }

    /// Creates a named task-list and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the name is empty, or the repository
    /// error when persistence fails.
    pub async fn create_task_list(&self, name: &str) -> TaskListServiceResult<TaskListId> {
        let list = TaskList::new(name)?;
        let list_id = self.lists.create(&list).await?;
        debug!("created task list {list_id}");
        Ok(list_id)
    }

    /// Renames an existing task-list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list is
    /// absent.
    pub async fn update_task_list(
        &self,
        list_id: TaskListId,
        new_name: &str,
    ) -> TaskListServiceResult<()> {
        let mut list = self.lists.get_by_id(list_id).await?;
        list.rename(new_name);
        self.lists.update(&list).await?;
        Ok(())
    }

    /// Deletes a task-list by identifier.
    ///
    /// Member tasks are not deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list is
    /// absent.
    pub async fn delete_task_list(&self, list_id: TaskListId) -> TaskListServiceResult<()> {
        self.lists.delete(list_id).await?;
        Ok(())
    }

    /// Creates a task and links it into the named list, returning the new
    /// task's identifier.
    ///
    /// The two writes are not atomic: when linking fails, the task has
    /// already been persisted to the task repository and is not rolled
    /// back. The linking failure is what the caller receives.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the task fields are invalid, the task
    /// repository's error when persisting the task fails, or the list
    /// repository's error (typically `NotFound`) when linking fails.
    pub async fn add_task(
        &self,
        list_id: TaskListId,
        title: &str,
        description: &str,
        deadline: DateTime<Utc>,
    ) -> TaskListServiceResult<TaskId> {
        let task = Task::new(title, description, deadline, &*self.clock)?;
        let task_id = self.tasks.create(&task).await?;
        if let Err(err) = self.lists.add_task_to_list(task_id, list_id).await {
            warn!("task {task_id} persisted but not linked to list {list_id}: {err}");
            return Err(err.into());
        }
        debug!("added task {task_id} to list {list_id}");
        Ok(task_id)
    }

    /// Updates an existing task with the single-field-priority semantics of
    /// [`Task::update`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task is absent.
    pub async fn update_task(
        &self,
        task_id: TaskId,
        title: &str,
        description: &str,
        deadline: Option<DateTime<Utc>>,
    ) -> TaskListServiceResult<()> {
        let mut task = self.tasks.get_by_id(task_id).await?;
        task.update(title, description, deadline);
        self.tasks.update(&task).await?;
        Ok(())
    }

    /// Deletes a task by identifier.
    ///
    /// List memberships referencing the task are left in place and become
    /// dangling.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task is absent.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskListServiceResult<()> {
        self.tasks.delete(task_id).await?;
        Ok(())
    }

    /// Retrieves a task-list by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list is
    /// absent.
    pub async fn get_task_list(&self, list_id: TaskListId) -> TaskListServiceResult<TaskList> {
        let list = self.lists.get_by_id(list_id).await?;
        Ok(list)
    }

    /// Retrieves the resolvable tasks of a list, in membership order.
    ///
    /// Dangling member identifiers are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list is
    /// absent.
    pub async fn get_tasks_by_task_list(
        &self,
        list_id: TaskListId,
    ) -> TaskListServiceResult<Vec<Task>> {
        let tasks = self.lists.get_tasks_by_list(list_id).await?;
        Ok(tasks)
    }
}

//! In-memory task-list repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Task, TaskId, TaskList, TaskListId};
use crate::ports::{
    TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult, TaskRepository,
};

/// Thread-safe in-memory task-list repository.
///
/// Holds its own mutex, independent of the task repository's. The task
/// repository reference is used only for the batched read in
/// [`TaskListRepository::get_tasks_by_list`]; task records are never
/// written through it.
#[derive(Debug, Clone)]
pub struct InMemoryTaskListRepository<T> {
    lists: Arc<Mutex<HashMap<TaskListId, TaskList>>>,
    tasks: Arc<T>,
}

impl<T> InMemoryTaskListRepository<T>
where
    T: TaskRepository,
{
    /// Creates an empty in-memory repository resolving members through
    /// `tasks`.
    #[must_use]
    pub fn new(tasks: Arc<T>) -> Self {
        Self {
            lists: Arc::new(Mutex::new(HashMap::new())),
            tasks,
        }
    }

    /// Acquires the repository lock, mapping poisoning to the persistence
    /// error channel.
    fn locked(&self) -> TaskListRepositoryResult<MutexGuard<'_, HashMap<TaskListId, TaskList>>> {
        self.lists.lock().map_err(|err| {
            TaskListRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl<T> TaskListRepository for InMemoryTaskListRepository<T>
where
    T: TaskRepository,
{
    async fn create(&self, list: &TaskList) -> TaskListRepositoryResult<TaskListId> {
        let mut lists = self.locked()?;
        let list_id = list.id();
        lists.insert(list_id, list.clone());
        Ok(list_id)
    }

    async fn get_by_id(&self, id: TaskListId) -> TaskListRepositoryResult<TaskList> {
        let lists = self.locked()?;
        lists
            .get(&id)
            .cloned()
            .ok_or(TaskListRepositoryError::NotFound(id))
    }

    async fn update(&self, list: &TaskList) -> TaskListRepositoryResult<()> {
        let mut lists = self.locked()?;
        if !lists.contains_key(&list.id()) {
            return Err(TaskListRepositoryError::NotFound(list.id()));
        }
        lists.insert(list.id(), list.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskListId) -> TaskListRepositoryResult<()> {
        let mut lists = self.locked()?;
        lists
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskListRepositoryError::NotFound(id))
    }

    async fn add_task_to_list(
        &self,
        task_id: TaskId,
        list_id: TaskListId,
    ) -> TaskListRepositoryResult<()> {
        let mut lists = self.locked()?;
        let list = lists
            .get_mut(&list_id)
            .ok_or(TaskListRepositoryError::NotFound(list_id))?;
        list.push_task(task_id);
        Ok(())
    }

    async fn get_tasks_by_list(&self, list_id: TaskListId) -> TaskListRepositoryResult<Vec<Task>> {
        // Copy the membership out so the list lock is released before the
        // task lookup awaits.
        let member_ids = {
            let lists = self.locked()?;
            let list = lists
                .get(&list_id)
                .ok_or(TaskListRepositoryError::NotFound(list_id))?;
            list.task_ids().to_vec()
        };

        let tasks = self.tasks.get_by_ids(&member_ids).await?;
        Ok(tasks)
    }
}

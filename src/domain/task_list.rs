//! Task-list entity: a named collection of task identifiers.

use super::{TaskDomainError, TaskId, TaskListId};
use serde::{Deserialize, Serialize};

/// A named, ordered collection of task identifiers.
///
/// Membership is append-only through the public API and may contain
/// duplicates. The referenced tasks live in their own repository; a stored
/// identifier is not guaranteed to resolve to an existing task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    id: TaskListId,
    name: String,
    task_ids: Vec<TaskId>,
}

impl TaskList {
    /// Creates a named task-list with a fresh identifier and no members.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyListName`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, TaskDomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TaskDomainError::EmptyListName);
        }

        Ok(Self {
            id: TaskListId::new(),
            name,
            task_ids: Vec::new(),
        })
    }

    /// Returns the task-list identifier.
    #[must_use]
    pub const fn id(&self) -> TaskListId {
        self.id
    }

    /// Returns the task-list name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member task identifiers in insertion order.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Replaces the task-list name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends a task identifier to the membership.
    ///
    /// Duplicates are permitted, and the identifier is not checked against
    /// any task repository.
    pub fn push_task(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }
}

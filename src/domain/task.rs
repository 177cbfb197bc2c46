//! Task entity: a titled, deadline-bound unit of work.

use super::{TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A titled, deadline-bound unit of work.
///
/// Tasks are constructed only through [`Task::new`], which validates the
/// title and deadline and assigns a fresh identifier. The identifier is
/// immutable for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    deadline: DateTime<Utc>,
}

impl Task {
    /// Creates a validated task with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when `title` is empty, or
    /// [`TaskDomainError::DeadlineInPast`] when `deadline` is strictly
    /// before the clock's current time. A deadline equal to the current
    /// instant is accepted.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = title.into();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        if deadline < clock.utc() {
            return Err(TaskDomainError::DeadlineInPast(deadline));
        }

        Ok(Self {
            id: TaskId::new(),
            title,
            description: description.into(),
            deadline,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Applies at most one field per call, in priority order title,
    /// description, deadline.
    ///
    /// A non-empty `title` replaces the title and nothing else. The
    /// description is replaced only when `title` is empty, and the deadline
    /// only when both `title` and `description` are empty. A call with an
    /// empty title, empty description, and no deadline leaves the task
    /// untouched.
    pub fn update(
        &mut self,
        title: &str,
        description: &str,
        deadline: Option<DateTime<Utc>>,
    ) {
        if !title.is_empty() {
            self.title = title.to_owned();
        } else if !description.is_empty() {
            self.description = description.to_owned();
        } else if let Some(new_deadline) = deadline {
            self.deadline = new_deadline;
        }
    }
}

//! Error types for domain validation.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task deadline is strictly before the current time.
    #[error("task deadline {0} is in the past")]
    DeadlineInPast(DateTime<Utc>),

    /// The task-list name is empty.
    #[error("task list name must not be empty")]
    EmptyListName,
}

//! Port contracts for task and task-list persistence.
//!
//! Ports define storage-agnostic interfaces used by the service layer, so
//! either backend can be swapped without touching orchestration code.

pub mod task_list_repository;
pub mod task_repository;

pub use task_list_repository::{
    TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult,
};
pub use task_repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

//! Domain model for task and task-list management.
//!
//! The domain models deadline-bound tasks and named task-lists that
//! reference tasks by identifier, keeping all storage concerns outside of
//! the domain boundary.

mod error;
mod ids;
mod task;
mod task_list;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskListId};
pub use task::Task;
pub use task_list::TaskList;

//! Application services orchestrating the repositories.

mod task_list;

pub use task_list::{TaskListService, TaskListServiceError, TaskListServiceResult};

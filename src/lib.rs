//! Tasklists: a task and task-list management core.
//!
//! This crate maintains tasks and named task-lists, associates tasks with
//! lists, and exposes create/read/update/delete operations through a service
//! layer composed over two independently swappable storage backends.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure entities and validation with no infrastructure
//!   dependencies
//! - **Ports**: Abstract repository contracts for task and task-list
//!   persistence
//! - **Adapters**: Concrete port implementations (in-memory storage)
//! - **Services**: Orchestration across both repositories
//!
//! # Modules
//!
//! - [`domain`]: `Task` and `TaskList` entities with typed identifiers
//! - [`ports`]: repository trait contracts and their error channels
//! - [`adapters`]: in-memory repository backends
//! - [`services`]: the [`services::TaskListService`] use-case layer

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

//! In-memory repository backends.
//!
//! Both adapters serialize every operation under a single coarse mutex per
//! repository instance. Critical sections only touch the owned map and
//! never await, so hold times are bounded.

mod task;
mod task_list;

pub use task::InMemoryTaskRepository;
pub use task_list::InMemoryTaskListRepository;

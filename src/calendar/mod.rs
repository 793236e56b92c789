//! Calendar domain models and business logic
//!
//! This module contains the task model and the collection that holds it.
//! It is split into submodules:
//! - `task`: Note/Birthday task variants and their construction
//! - `task_store`: The ordered task collection with add/delete
//! - `queries`: Filtering and sorting over the collection
//! - `record`: Persisted record form of a task

mod queries;
mod record;
mod task;
mod task_store;

pub use queries::{TaskFilter, remaining_minutes, sorted_by_type};
pub use record::{RecordError, TaskRecord};
pub use task::{AddTaskError, Birthday, Note, Task, TaskKind};
pub use task_store::TaskStore;

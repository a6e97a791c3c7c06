//! Value objects describing list queries and their results.

pub mod task_filter;
pub mod task_page;
pub mod task_query;

pub use task_filter::{TaskFilter, LIST_CACHE_NAMESPACE};
pub use task_page::TaskPage;
pub use task_query::{SqlParam, Statement, TaskListQuery};

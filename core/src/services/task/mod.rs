//! Task service module
//!
//! Plans filtered list queries, serves task pages through a cache-aside
//! layer, and exposes the single-task operations.

mod config;
mod memory_cache;
mod planner;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::TaskServiceConfig;
pub use memory_cache::InMemoryPageCache;
pub use planner::{escape_like, PredicateBuilder, TaskQueryPlanner};
pub use service::TaskService;
pub use traits::PageCache;
pub use types::ListedPage;

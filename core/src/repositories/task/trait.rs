//! Task repository trait defining the interface for task persistence.
//!
//! List reads are driven by a planned [`TaskListQuery`]; SQL-backed
//! implementations execute its statements, other implementations may
//! evaluate its normalized filter directly.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::task::{NewTask, Task, TaskChanges};
use crate::domain::value_objects::TaskListQuery;
use crate::errors::DomainError;

/// Repository trait for Task persistence operations
///
/// Every operation ignores soft-deleted rows.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetch one page of tasks
    ///
    /// # Arguments
    /// * `query` - Planned select and count statements plus the filter they were derived from
    ///
    /// # Returns
    /// * `Ok(Vec<Task>)` - Tasks on the requested page, ordered by due date then id
    /// * `Err(DomainError::Store)` - The record store could not be queried
    async fn fetch_page(&self, query: &TaskListQuery) -> Result<Vec<Task>, DomainError>;

    /// Count every task matching the query's predicates, ignoring pagination
    async fn count(&self, query: &TaskListQuery) -> Result<u64, DomainError>;

    /// Find an undeleted task by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, DomainError>;

    /// Insert a task and return the stored record
    async fn create(&self, task: NewTask) -> Result<Task, DomainError>;

    /// Apply changes to an undeleted task
    ///
    /// # Returns
    /// * `Ok(true)` - A row was updated
    /// * `Ok(false)` - No undeleted task has this id
    async fn update(&self, id: i64, changes: TaskChanges) -> Result<bool, DomainError>;

    /// Mark an undeleted task as deleted at `deleted_at`
    ///
    /// # Returns
    /// * `Ok(true)` - The task was soft-deleted
    /// * `Ok(false)` - No undeleted task has this id
    async fn soft_delete(&self, id: i64, deleted_at: DateTime<Utc>) -> Result<bool, DomainError>;
}

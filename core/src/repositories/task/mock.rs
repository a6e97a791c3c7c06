//! In-memory implementation of TaskRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::task::{NewTask, Task, TaskChanges};
use crate::domain::value_objects::{TaskFilter, TaskListQuery};
use crate::errors::{DomainError, StoreError};

use super::trait_::TaskRepository;

/// Mock task repository evaluating filters in memory.
///
/// Matching follows the SQL planner: exact status, case-insensitive
/// substring search over title and description, due date ascending with
/// missing dates last, then id.
pub struct MockTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
    next_id: AtomicI64,
    fetch_calls: AtomicUsize,
    count_calls: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
            fetch_calls: AtomicUsize::new(0),
            count_calls: AtomicUsize::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Create a repository seeded with `tasks`
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
            next_id: AtomicI64::new(next_id),
            ..Self::new()
        }
    }

    /// Make every subsequent call fail with a store error
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, AtomicOrdering::SeqCst);
    }

    /// Number of `fetch_page` calls so far
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(AtomicOrdering::SeqCst)
    }

    /// Number of `count` calls so far
    pub fn count_calls(&self) -> usize {
        self.count_calls.load(AtomicOrdering::SeqCst)
    }

    /// Snapshot of every stored task, deleted ones included
    pub async fn all(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.should_fail.load(AtomicOrdering::SeqCst) {
            return Err(StoreError::unavailable("mock store failure").into());
        }
        Ok(())
    }

    fn matches(task: &Task, filter: &TaskFilter) -> bool {
        if task.is_deleted() {
            return false;
        }
        if let Some(status) = &filter.status {
            if task.status.as_deref() != Some(status.as_str()) {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            let contains = |field: &Option<String>| {
                field
                    .as_deref()
                    .map(|value| value.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            };
            if !contains(&task.title) && !contains(&task.description) {
                return false;
            }
        }
        true
    }

    fn list_order(a: &Task, b: &Task) -> Ordering {
        let by_due = match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_due.then(a.id.cmp(&b.id))
    }
}

impl Default for MockTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn fetch_page(&self, query: &TaskListQuery) -> Result<Vec<Task>, DomainError> {
        self.fetch_calls.fetch_add(1, AtomicOrdering::SeqCst);
        self.check_available()?;

        let pagination = query.filter.pagination();
        let tasks = self.tasks.read().await;
        let mut matching: Vec<&Task> = tasks
            .iter()
            .filter(|task| Self::matches(task, &query.filter))
            .collect();
        matching.sort_by(|a, b| Self::list_order(a, b));

        Ok(matching
            .into_iter()
            .skip(usize::try_from(pagination.offset()).unwrap_or(usize::MAX))
            .take(pagination.limit() as usize)
            .map(Task::list_view)
            .collect())
    }

    async fn count(&self, query: &TaskListQuery) -> Result<u64, DomainError> {
        self.count_calls.fetch_add(1, AtomicOrdering::SeqCst);
        self.check_available()?;

        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .filter(|task| Self::matches(task, &query.filter))
            .count() as u64)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, DomainError> {
        self.check_available()?;
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .find(|task| task.id == id && !task.is_deleted())
            .cloned())
    }

    async fn create(&self, task: NewTask) -> Result<Task, DomainError> {
        self.check_available()?;
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let stored = Task {
            id,
            title: Some(task.title),
            description: Some(task.description),
            status: Some(task.status),
            due_date: task.due_date,
            created_at: Some(task.created_at),
            created_by: Some(task.created_by),
            updated_at: None,
            updated_by: None,
            deleted_at: None,
        };
        self.tasks.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> Result<bool, DomainError> {
        self.check_available()?;
        let mut tasks = self.tasks.write().await;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id && !t.is_deleted()) else {
            return Ok(false);
        };

        if let Some(title) = changes.title {
            task.title = Some(title);
        }
        if let Some(description) = changes.description {
            task.description = Some(description);
        }
        if let Some(status) = changes.status {
            task.status = Some(status);
        }
        task.updated_at = Some(changes.updated_at);
        task.updated_by = Some(changes.updated_by);
        Ok(true)
    }

    async fn soft_delete(&self, id: i64, deleted_at: DateTime<Utc>) -> Result<bool, DomainError> {
        self.check_available()?;
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.id == id && !t.is_deleted()) {
            Some(task) => {
                task.deleted_at = Some(deleted_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

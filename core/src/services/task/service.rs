//! Main task service implementation

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::task::{NewTask, Task, TaskChanges};
use crate::domain::value_objects::{TaskFilter, TaskPage};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TaskRepository;

use super::config::TaskServiceConfig;
use super::planner::TaskQueryPlanner;
use super::traits::PageCache;
use super::types::ListedPage;

/// Task service serving list pages cache-aside and single-task operations
pub struct TaskService<R: TaskRepository, C: PageCache> {
    /// Record store
    repository: Arc<R>,
    /// Cache for serialized list pages
    cache: Arc<C>,
    planner: TaskQueryPlanner,
    /// Service configuration
    config: TaskServiceConfig,
}

impl<R: TaskRepository, C: PageCache> TaskService<R, C> {
    /// Create a new task service
    ///
    /// # Arguments
    ///
    /// * `repository` - Task repository implementation
    /// * `cache` - Page cache implementation
    /// * `config` - Service configuration
    pub fn new(repository: Arc<R>, cache: Arc<C>, config: TaskServiceConfig) -> Self {
        Self {
            repository,
            cache,
            planner: TaskQueryPlanner::new(),
            config,
        }
    }

    /// List one page of tasks matching `filter`.
    ///
    /// A cached snapshot is served as-is while it lives. Otherwise the page
    /// and total are read from the store and the serialized page is cached
    /// for the configured TTL. Cache failures only cost a store round-trip.
    ///
    /// # Returns
    ///
    /// * `Ok(ListedPage)` - The page and its JSON snapshot
    /// * `Err(DomainError::Store)` - The record store failed
    pub async fn list(&self, filter: &TaskFilter) -> DomainResult<ListedPage> {
        let filter = filter.normalize();
        let key = filter.cache_key();

        if let Some(listed) = self.read_cached(&key).await {
            return Ok(listed);
        }

        let query = self.planner.plan(&filter);
        let tasks = self.repository.fetch_page(&query).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch task page");
            e
        })?;
        let total = self.repository.count(&query).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to count tasks");
            e
        })?;

        let page = TaskPage::new(tasks, filter.pagination(), total);
        let snapshot = serde_json::to_string(&page).map_err(|e| DomainError::Internal {
            message: format!("Failed to serialize task page: {}", e),
        })?;

        if let Err(e) = self
            .cache
            .set(&key, &snapshot, self.config.list_cache_ttl_seconds)
            .await
        {
            tracing::warn!(cache_key = %key, error = %e, "Failed to cache task page");
        }

        tracing::debug!(
            cache_key = %key,
            total_tasks = total,
            returned = page.tasks.len(),
            "Task page loaded from store"
        );

        Ok(ListedPage {
            page,
            snapshot,
            from_cache: false,
        })
    }

    async fn read_cached(&self, key: &str) -> Option<ListedPage> {
        let snapshot = match self.cache.get(key).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(cache_key = %key, error = %e, "Cache read failed, querying store");
                return None;
            }
        };

        match ListedPage::from_snapshot(snapshot) {
            Ok(listed) => {
                tracing::debug!(cache_key = %key, "Task page served from cache");
                Some(listed)
            }
            Err(e) => {
                tracing::warn!(cache_key = %key, error = %e, "Discarding cached page");
                None
            }
        }
    }

    /// Fetch an undeleted task by id
    ///
    /// # Returns
    ///
    /// * `Ok(Task)` - The task
    /// * `Err(DomainError::NotFound)` - No undeleted task has this id
    pub async fn get(&self, id: i64) -> DomainResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Task {}", id),
            })
    }

    /// Validate and insert a task
    pub async fn create(&self, task: NewTask) -> DomainResult<Task> {
        task.validate()?;
        let created = self.repository.create(task).await?;
        tracing::info!(task_id = created.id, created_by = ?created.created_by, "Task created");
        Ok(created)
    }

    /// Apply `changes` to an undeleted task
    pub async fn update(&self, id: i64, changes: TaskChanges) -> DomainResult<()> {
        changes.validate()?;
        let updated_by = changes.updated_by.clone();
        if !self.repository.update(id, changes).await? {
            return Err(DomainError::NotFound {
                resource: format!("Task {}", id),
            });
        }
        tracing::info!(task_id = id, updated_by = %updated_by, "Task updated");
        Ok(())
    }

    /// Soft-delete an undeleted task
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.repository.soft_delete(id, Utc::now()).await? {
            return Err(DomainError::NotFound {
                resource: format!("Task {}", id),
            });
        }
        tracing::info!(task_id = id, "Task deleted");
        Ok(())
    }
}

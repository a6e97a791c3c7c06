//! PostgreSQL implementation of the TaskRepository trait.
//!
//! List reads execute the statements produced by the query planner and
//! bind their typed arguments in order. Row-level operations use fixed
//! statements; all of them skip soft-deleted rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryScalar};
use sqlx::{PgPool, Postgres, Row};

use tq_core::domain::entities::task::{NewTask, Task, TaskChanges};
use tq_core::domain::value_objects::{SqlParam, TaskListQuery};
use tq_core::errors::{DomainError, StoreError};
use tq_core::repositories::TaskRepository;

const TASK_COLUMNS: &str = "id, title, description, status, due_date, created_at, created_by, updated_at, updated_by, deleted_at";

/// PostgreSQL implementation of TaskRepository
pub struct PgTaskRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgTaskRepository {
    /// Create a new PostgreSQL task repository
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool from SQLx
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn bind_all<'q>(
        mut query: Query<'q, Postgres, PgArguments>,
        params: &'q [SqlParam],
    ) -> Query<'q, Postgres, PgArguments> {
        for param in params {
            query = match param {
                SqlParam::Text(value) => query.bind(value.as_str()),
                SqlParam::Int(value) => query.bind(*value),
            };
        }
        query
    }

    fn bind_all_scalar<'q>(
        mut query: QueryScalar<'q, Postgres, i64, PgArguments>,
        params: &'q [SqlParam],
    ) -> QueryScalar<'q, Postgres, i64, PgArguments> {
        for param in params {
            query = match param {
                SqlParam::Text(value) => query.bind(value.as_str()),
                SqlParam::Int(value) => query.bind(*value),
            };
        }
        query
    }

    fn store_error(context: &str, error: sqlx::Error) -> DomainError {
        tracing::error!("{}: {}", context, error);
        DomainError::Store(StoreError::unavailable(format!("{}: {}", context, error)))
    }

    fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
    where
        T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
    {
        row.try_get(name).map_err(|e| DomainError::Internal {
            message: format!("Failed to get {}: {}", name, e),
        })
    }

    /// Map a list row (id, title, description, status, due_date)
    fn row_to_listed_task(row: &PgRow) -> Result<Task, DomainError> {
        Ok(Task {
            id: Self::column(row, "id")?,
            title: Self::column(row, "title")?,
            description: Self::column(row, "description")?,
            status: Self::column(row, "status")?,
            due_date: Self::column(row, "due_date")?,
            created_at: None,
            created_by: None,
            updated_at: None,
            updated_by: None,
            deleted_at: None,
        })
    }

    /// Map a full task row
    fn row_to_task(row: &PgRow) -> Result<Task, DomainError> {
        Ok(Task {
            created_at: Self::column(row, "created_at")?,
            created_by: Self::column(row, "created_by")?,
            updated_at: Self::column(row, "updated_at")?,
            updated_by: Self::column(row, "updated_by")?,
            deleted_at: Self::column(row, "deleted_at")?,
            ..Self::row_to_listed_task(row)?
        })
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn fetch_page(&self, query: &TaskListQuery) -> Result<Vec<Task>, DomainError> {
        let statement = &query.select;
        tracing::debug!(params = statement.arity(), "Fetching task page");
        let rows = Self::bind_all(sqlx::query(&statement.sql), &statement.params)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to fetch task page", e))?;

        rows.iter().map(Self::row_to_listed_task).collect()
    }

    async fn count(&self, query: &TaskListQuery) -> Result<u64, DomainError> {
        let statement = &query.count;
        let total = Self::bind_all_scalar(sqlx::query_scalar(&statement.sql), &statement.params)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to count tasks", e))?;

        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, DomainError> {
        let sql = format!(
            "SELECT {} FROM task WHERE id = $1 AND deleted_at IS NULL",
            TASK_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to find task", e))?;

        row.as_ref().map(Self::row_to_task).transpose()
    }

    async fn create(&self, task: NewTask) -> Result<Task, DomainError> {
        let sql = format!(
            "INSERT INTO task (title, description, status, due_date, created_at, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            TASK_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(&task.title)
            .bind(&task.description)
            .bind(&task.status)
            .bind(task.due_date)
            .bind(task.created_at)
            .bind(&task.created_by)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to insert task", e))?;

        Self::row_to_task(&row)
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE task SET title = COALESCE($1, title), description = COALESCE($2, description), \
             status = COALESCE($3, status), updated_at = $4, updated_by = $5 \
             WHERE id = $6 AND deleted_at IS NULL",
        )
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.status)
        .bind(changes.updated_at)
        .bind(&changes.updated_by)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::store_error("Failed to update task", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete(&self, id: i64, deleted_at: DateTime<Utc>) -> Result<bool, DomainError> {
        let result =
            sqlx::query("UPDATE task SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL")
                .bind(deleted_at)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| Self::store_error("Failed to delete task", e))?;

        Ok(result.rows_affected() > 0)
    }
}

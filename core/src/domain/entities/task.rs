//! Task entity and the write models used to create and modify tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Status assigned to a task created without one
pub const DEFAULT_TASK_STATUS: &str = "pending";

/// Minimum title length in characters
pub const TITLE_MIN_LENGTH: usize = 3;

/// Maximum title length in characters
pub const TITLE_MAX_LENGTH: usize = 255;

/// A task record.
///
/// Every column except `id` is nullable in storage. List queries only load
/// `id`, `title`, `description`, `status` and `due_date`; the audit columns
/// are `None` on listed tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    /// A task with only an id and title, everything else unset
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            description: None,
            status: None,
            due_date: None,
            created_at: None,
            created_by: None,
            updated_at: None,
            updated_by: None,
            deleted_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Whether the task has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Projection returned by list queries
    pub fn list_view(&self) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
            due_date: self.due_date,
            created_at: None,
            created_by: None,
            updated_at: None,
            updated_by: None,
            deleted_at: None,
        }
    }
}

/// Data required to insert a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_date: Option<DateTime<Utc>>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl NewTask {
    /// Build a new task owned by `created_by`, stamped with the current time
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: Option<String>,
        due_date: Option<DateTime<Utc>>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_TASK_STATUS.to_string()),
            due_date,
            created_by: created_by.into(),
            created_at: Utc::now(),
        }
    }

    /// Title is required and 3-255 characters; description is required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title_length = self.title.chars().count();
        if title_length == 0 {
            return Err(ValidationError::RequiredField {
                field: "title".to_string(),
            });
        }
        if !(TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&title_length) {
            return Err(ValidationError::InvalidLength {
                field: "title".to_string(),
                min: TITLE_MIN_LENGTH,
                max: TITLE_MAX_LENGTH,
                actual: title_length,
            });
        }
        if self.description.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "description".to_string(),
            });
        }
        Ok(())
    }
}

/// Changes applied to an existing task. `None` fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

impl TaskChanges {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        status: Option<String>,
        updated_by: impl Into<String>,
    ) -> Self {
        Self {
            title,
            description,
            status,
            updated_by: updated_by.into(),
            updated_at: Utc::now(),
        }
    }

    /// A provided title must satisfy the same length rule as on creation
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            let title_length = title.chars().count();
            if !(TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&title_length) {
                return Err(ValidationError::InvalidLength {
                    field: "title".to_string(),
                    min: TITLE_MIN_LENGTH,
                    max: TITLE_MAX_LENGTH,
                    actual: title_length,
                });
            }
        }
        Ok(())
    }
}

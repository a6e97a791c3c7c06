use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use tq_core::domain::entities::task::{NewTask, TaskChanges};
use tq_core::domain::value_objects::TaskFilter;
use tq_shared::types::Pagination;
use url::form_urlencoded;

/// Query string of `GET /tasks`.
///
/// Kept as raw strings so malformed numbers fall back to defaults instead of
/// failing extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTasksQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListTasksQuery {
    /// Parse a raw query string. The first occurrence of each key wins and
    /// unknown keys are ignored, so no query string fails to parse.
    pub fn from_query_string(raw: &str) -> Self {
        let mut query = Self::default();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let slot = match key.as_ref() {
                "status" => &mut query.status,
                "search" => &mut query.search,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        query
    }

    pub fn into_filter(self) -> TaskFilter {
        let pagination = Pagination::from_raw(self.page.as_deref(), self.limit.as_deref());
        TaskFilter::new(self.status, self.search, pagination).normalize()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// 3 to 255 characters
    #[serde(default)]
    #[validate(length(min = 3, max = 255))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub description: String,

    pub due_date: Option<DateTime<Utc>>,

    /// Defaults to `pending`
    pub status: Option<String>,
}

impl CreateTaskRequest {
    pub fn into_new_task(self, created_by: &str) -> NewTask {
        NewTask::new(self.title, self.description, self.status, self.due_date, created_by)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 3, max = 255))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub status: Option<String>,
}

impl UpdateTaskRequest {
    pub fn into_changes(self, updated_by: &str) -> TaskChanges {
        TaskChanges::new(self.title, self.description, self.status, updated_by)
    }
}

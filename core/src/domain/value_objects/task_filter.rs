//! Filter set accepted by the task list endpoint.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tq_shared::types::{Pagination, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Namespace every list cache key starts with
pub const LIST_CACHE_NAMESPACE: &str = "tasks:list";

/// Optional filters plus pagination for a task list request.
///
/// Empty `status` or `search` strings are absent values. Field order is
/// fixed; the cache key digest depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            status: None,
            search: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TaskFilter {
    pub fn new(status: Option<String>, search: Option<String>, pagination: Pagination) -> Self {
        Self {
            status,
            search,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Canonical form: empty strings dropped, page and page size below 1
    /// replaced by their defaults. Idempotent.
    pub fn normalize(&self) -> Self {
        let pagination = self.pagination();
        Self {
            status: self.status.clone().filter(|s| !s.is_empty()),
            search: self.search.clone().filter(|s| !s.is_empty()),
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }

    /// Pagination view with defaults applied
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size)
    }

    /// Cache key for the page this filter selects.
    ///
    /// Layout is `tasks:list:p{page}:l{page_size}:{digest}` where the digest
    /// is the hex SHA-256 of the JSON encoding of the normalized filter.
    /// Filters that normalize to the same value share a key.
    pub fn cache_key(&self) -> String {
        let normalized = self.normalize();
        let encoded = serde_json::to_vec(&normalized).unwrap_or_default();
        let digest = hex::encode(Sha256::digest(&encoded));
        format!(
            "{}:p{}:l{}:{}",
            LIST_CACHE_NAMESPACE, normalized.page, normalized.page_size, digest
        )
    }
}

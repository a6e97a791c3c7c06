//! Configuration for the task service

use tq_shared::config::cache::{CacheConfig, DEFAULT_LIST_TTL_SECONDS};

/// Configuration for the task service
#[derive(Debug, Clone)]
pub struct TaskServiceConfig {
    /// Seconds a cached list page stays valid. Mutations do not invalidate
    /// cached pages, so this is also the staleness window.
    pub list_cache_ttl_seconds: u64,
}

impl Default for TaskServiceConfig {
    fn default() -> Self {
        Self {
            list_cache_ttl_seconds: DEFAULT_LIST_TTL_SECONDS,
        }
    }
}

impl From<&CacheConfig> for TaskServiceConfig {
    fn from(cache: &CacheConfig) -> Self {
        Self {
            list_cache_ttl_seconds: cache.list_ttl,
        }
    }
}

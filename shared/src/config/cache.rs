//! Cache configuration module

use serde::{Deserialize, Serialize};

/// How long a cached task page stays valid, in seconds.
///
/// Writes to tasks do not evict cached pages, so this is also the upper
/// bound on how stale a listed page can be.
pub const DEFAULT_LIST_TTL_SECONDS: u64 = 30;

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// TTL for cached task list pages in seconds
    #[serde(default = "default_list_ttl")]
    pub list_ttl: u64,

    /// Optional prefix prepended to every cache key
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// Connection attempts made at startup before giving up
    #[serde(default = "default_connect_retries")]
    pub connect_retries: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connection_timeout: 5,
            list_ttl: default_list_ttl(),
            key_prefix: None,
            connect_retries: default_connect_retries(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let list_ttl = std::env::var("TASK_LIST_CACHE_TTL")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_list_ttl);
        let key_prefix = std::env::var("CACHE_KEY_PREFIX")
            .ok()
            .filter(|prefix| !prefix.is_empty());

        Self {
            url,
            list_ttl,
            key_prefix,
            ..Default::default()
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

fn default_list_ttl() -> u64 {
    DEFAULT_LIST_TTL_SECONDS
}

fn default_connect_retries() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.url, "redis://localhost:6379");
        assert_eq!(config.list_ttl, 30);
        assert_eq!(config.connect_retries, 3);
    }

    #[test]
    fn test_cache_config_with_prefix() {
        let config = CacheConfig::new("redis://cache:6379").with_prefix("taskquery");
        assert_eq!(config.make_key("tasks:list"), "taskquery:tasks:list");
    }

    #[test]
    fn test_cache_key_without_prefix() {
        let config = CacheConfig::default();
        assert_eq!(config.make_key("tasks:list"), "tasks:list");
    }
}

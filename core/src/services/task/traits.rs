//! Trait for page cache integration

use async_trait::async_trait;

use crate::errors::CacheError;

/// Key/value store for serialized list pages
#[async_trait]
pub trait PageCache: Send + Sync {
    /// Fetch a cached value, `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a value that expires after `ttl_seconds`
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError>;
}

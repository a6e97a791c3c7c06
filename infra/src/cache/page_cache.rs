//! Redis-backed store for serialized task list pages.

use async_trait::async_trait;

use tq_core::errors::CacheError;
use tq_core::services::task::PageCache;

use super::redis_client::RedisClient;

/// Attempts per cache command. A failed read falls through to the record
/// store, so page cache commands are never retried.
pub const PAGE_CACHE_MAX_ATTEMPTS: u32 = 1;

/// `PageCache` over Redis. Keys get the configured prefix; values expire
/// through `SETEX`.
#[derive(Clone)]
pub struct RedisPageCache {
    client: RedisClient,
}

impl RedisPageCache {
    pub fn new(client: RedisClient) -> Self {
        Self {
            client: client.with_max_attempts(PAGE_CACHE_MAX_ATTEMPTS),
        }
    }

    fn full_key(&self, key: &str) -> String {
        self.client.config().make_key(key)
    }
}

#[async_trait]
impl PageCache for RedisPageCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.client
            .get(&self.full_key(key))
            .await
            .map_err(|e| CacheError::unavailable(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
        self.client
            .set_with_expiry(&self.full_key(key), value, ttl_seconds)
            .await
            .map_err(|e| CacheError::unavailable(e.to_string()))
    }
}

//! Process-local page cache with per-entry expiry

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::errors::CacheError;

use super::traits::PageCache;

/// In-memory `PageCache`.
///
/// Expiry uses the tokio clock, so tests can advance time with
/// `tokio::time::pause` and `advance`.
#[derive(Default)]
pub struct InMemoryPageCache {
    entries: RwLock<HashMap<String, (String, Instant)>>,
    get_calls: AtomicUsize,
    set_calls: AtomicUsize,
    should_fail: AtomicBool,
}

impl InMemoryPageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the cache were unreachable
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    /// Store a value without touching the call counters
    pub async fn insert_raw(&self, key: &str, value: &str, ttl_seconds: u64) {
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds);
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value.to_string(), expires_at));
    }

    /// Keys of entries that have not expired
    pub async fn live_keys(&self) -> Vec<String> {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .iter()
            .filter(|(_, (_, expires_at))| *expires_at > now)
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn check_available(&self) -> Result<(), CacheError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(CacheError::unavailable("in-memory cache disabled"));
        }
        Ok(())
    }
}

#[async_trait]
impl PageCache for InMemoryPageCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let now = Instant::now();
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some((value, expires_at)) if *expires_at > now => Ok(Some(value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        self.insert_raw(key, value, ttl_seconds).await;
        Ok(())
    }
}

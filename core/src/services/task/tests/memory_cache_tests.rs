//! Tests for the in-memory page cache

use std::time::Duration;

use crate::services::task::{InMemoryPageCache, PageCache};

#[tokio::test(start_paused = true)]
async fn test_entries_expire_after_ttl() {
    let cache = InMemoryPageCache::new();
    cache.set("k", "v", 30).await.unwrap();

    tokio::time::advance(Duration::from_secs(29)).await;
    assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v"));

    tokio::time::advance(Duration::from_secs(1)).await;
    assert_eq!(cache.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_failing_cache_reports_unavailable() {
    let cache = InMemoryPageCache::new();
    cache.set_should_fail(true);

    assert!(cache.get("k").await.is_err());
    assert!(cache.set("k", "v", 30).await.is_err());
    assert_eq!(cache.get_calls(), 1);
    assert_eq!(cache.set_calls(), 1);
}

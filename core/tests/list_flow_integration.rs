//! Integration tests for login, token verification and the cached task list

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use tokio::sync::RwLock;

    use tq_core::domain::entities::User;
    use tq_core::errors::{AuthError, CacheError, DomainError};
    use tq_core::repositories::{MockTaskRepository, MockUserRepository};
    use tq_core::services::task::{PageCache, TaskService, TaskServiceConfig};
    use tq_core::services::token::TokenServiceConfig;
    use tq_core::{AuthService, Task, TaskFilter, TokenService};

    // Cache that ignores TTLs and records every key written
    struct RecordingCache {
        entries: RwLock<HashMap<String, String>>,
        ttls: RwLock<Vec<u64>>,
        gets: AtomicUsize,
    }

    impl RecordingCache {
        fn new() -> Self {
            Self {
                entries: RwLock::new(HashMap::new()),
                ttls: RwLock::new(Vec::new()),
                gets: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PageCache for RecordingCache {
        async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            Ok(self.entries.read().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
            self.entries.write().await.insert(key.to_string(), value.to_string());
            self.ttls.write().await.push(ttl_seconds);
            Ok(())
        }
    }

    fn tasks() -> Vec<Task> {
        vec![
            Task::new(1, "Write report")
                .with_description("quarterly numbers")
                .with_status("pending")
                .with_due_date(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            Task::new(2, "Review PR")
                .with_description("auth middleware")
                .with_status("done")
                .with_due_date(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()),
            Task::new(3, "Plan sprint").with_status("pending"),
        ]
    }

    async fn auth_service(tokens: Arc<TokenService>) -> AuthService<MockUserRepository> {
        let users = Arc::new(MockUserRepository::new());
        let hash = bcrypt::hash("s3cret", 4).unwrap();
        users.insert(User::new(7, "carol", hash)).await;
        AuthService::new(users, tokens)
    }

    #[tokio::test]
    async fn test_login_token_verifies_with_shared_codec() {
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("flow-secret")));
        let auth = auth_service(tokens.clone()).await;

        let result = auth.login("carol", "s3cret").await.unwrap();
        assert_eq!(result.identity, "carol");

        let claims = tokens.verify(&result.token).unwrap();
        assert_eq!(claims.identity(), "carol");

        let other = TokenService::new(TokenServiceConfig::new("another-secret"));
        assert!(other.verify(&result.token).is_err());
    }

    #[tokio::test]
    async fn test_login_rejects_bad_password() {
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("flow-secret")));
        let auth = auth_service(tokens).await;

        let error = auth.login("carol", "nope").await.unwrap_err();
        assert!(matches!(error, DomainError::Auth(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_list_through_custom_cache() {
        let repository = Arc::new(MockTaskRepository::with_tasks(tasks()));
        let cache = Arc::new(RecordingCache::new());
        let service = TaskService::new(
            repository.clone(),
            cache.clone(),
            TaskServiceConfig::default(),
        );

        let filter = TaskFilter::default().with_status("pending");
        let first = service.list(&filter).await.unwrap();
        let ids: Vec<i64> = first.page.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(first.page.pagination.total_tasks, 2);
        assert!(!first.from_cache);

        let second = service.list(&filter).await.unwrap();
        assert!(second.from_cache);
        assert_eq!(second.snapshot, first.snapshot);

        assert_eq!(repository.fetch_calls(), 1);
        assert_eq!(cache.gets.load(Ordering::SeqCst), 2);
        assert_eq!(*cache.ttls.read().await, vec![30]);
        assert!(cache.entries.read().await.contains_key(&filter.cache_key()));
    }

    #[tokio::test]
    async fn test_search_is_not_a_pattern() {
        let repository = Arc::new(MockTaskRepository::with_tasks(tasks()));
        let cache = Arc::new(RecordingCache::new());
        let service = TaskService::new(repository, cache, TaskServiceConfig::default());

        let listed = service
            .list(&TaskFilter::default().with_search("_e%"))
            .await
            .unwrap();
        assert!(listed.page.tasks.is_empty());
        assert_eq!(listed.page.pagination.total_pages, 0);
    }
}

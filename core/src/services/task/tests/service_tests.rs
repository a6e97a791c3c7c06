//! Unit tests for the task service

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::task::{NewTask, TaskChanges};
use crate::domain::value_objects::{TaskFilter, TaskPage};
use crate::errors::{CacheError, DomainError, StoreError, ValidationError};
use crate::repositories::MockTaskRepository;
use crate::services::task::{
    InMemoryPageCache, ListedPage, PageCache, TaskService, TaskServiceConfig,
};
use tq_shared::types::Pagination;

use super::mocks::{deleted_task, numbered_dataset, tes_dataset};

type TestService = TaskService<MockTaskRepository, InMemoryPageCache>;

fn create_service(
    tasks: Vec<crate::domain::entities::Task>,
) -> (TestService, Arc<MockTaskRepository>, Arc<InMemoryPageCache>) {
    let repository = Arc::new(MockTaskRepository::with_tasks(tasks));
    let cache = Arc::new(InMemoryPageCache::new());
    let service = TaskService::new(repository.clone(), cache.clone(), TaskServiceConfig::default());
    (service, repository, cache)
}

#[tokio::test]
async fn test_list_tes_scenario() {
    let (service, _, _) = create_service(tes_dataset());

    let listed = service.list(&TaskFilter::default()).await.unwrap();

    assert!(!listed.from_cache);
    let descriptions: Vec<_> = listed
        .page
        .tasks
        .iter()
        .map(|t| t.description.clone().unwrap())
        .collect();
    assert_eq!(
        descriptions,
        vec!["panjang penjelasannya", "panjang penjelasannya UPDATED"]
    );
    assert_eq!(listed.page.pagination.current_page, 1);
    assert_eq!(listed.page.pagination.total_pages, 1);
    assert_eq!(listed.page.pagination.total_tasks, 2);
}

#[tokio::test]
async fn test_list_status_without_match_is_empty() {
    let (service, _, _) = create_service(tes_dataset());

    let listed = service
        .list(&TaskFilter::default().with_status("done"))
        .await
        .unwrap();

    assert!(listed.page.tasks.is_empty());
    assert_eq!(listed.page.pagination.total_tasks, 0);
    assert_eq!(listed.page.pagination.total_pages, 0);
}

#[tokio::test]
async fn test_list_excludes_deleted_tasks() {
    let mut tasks = tes_dataset();
    tasks.push(deleted_task(3));
    let (service, _, _) = create_service(tasks);

    let listed = service.list(&TaskFilter::default().with_search("tes")).await.unwrap();

    assert_eq!(listed.page.pagination.total_tasks, 2);
    assert!(listed.page.tasks.iter().all(|t| t.id != 3));
}

#[tokio::test]
async fn test_list_search_is_case_insensitive_over_title_and_description() {
    let (service, _, _) = create_service(tes_dataset());

    let by_description = service
        .list(&TaskFilter::default().with_search("UPDATED"))
        .await
        .unwrap();
    let by_title = service.list(&TaskFilter::default().with_search("TES")).await.unwrap();

    assert_eq!(by_description.page.pagination.total_tasks, 1);
    assert_eq!(by_description.page.tasks[0].id, 2);
    assert_eq!(by_title.page.pagination.total_tasks, 2);
}

#[tokio::test]
async fn test_repeated_list_is_served_from_cache() {
    let (service, repository, _) = create_service(tes_dataset());
    let filter = TaskFilter::default();

    let first = service.list(&filter).await.unwrap();
    let second = service.list(&filter).await.unwrap();

    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(first.snapshot, second.snapshot);
    assert_eq!(repository.fetch_calls(), 1);
    assert_eq!(repository.count_calls(), 1);
}

#[tokio::test]
async fn test_cached_page_is_stale_until_ttl() {
    let (service, repository, _) = create_service(tes_dataset());
    let filter = TaskFilter::default();
    let before = service.list(&filter).await.unwrap();

    service
        .create(NewTask::new("tes", "another one", None, None, "alice"))
        .await
        .unwrap();
    let after = service.list(&filter).await.unwrap();

    assert_eq!(before.snapshot, after.snapshot);
    assert_eq!(repository.fetch_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_expired_entry_is_reloaded() {
    let (service, repository, _) = create_service(tes_dataset());
    let filter = TaskFilter::default();

    service.list(&filter).await.unwrap();
    tokio::time::advance(Duration::from_secs(31)).await;
    let reloaded = service.list(&filter).await.unwrap();

    assert!(!reloaded.from_cache);
    assert_eq!(repository.fetch_calls(), 2);
}

#[tokio::test]
async fn test_pages_are_disjoint_and_cached_separately() {
    let (service, _, cache) = create_service(numbered_dataset(25));

    let first = service
        .list(&TaskFilter::default().with_page(1, 10))
        .await
        .unwrap();
    let second = service
        .list(&TaskFilter::default().with_page(2, 10))
        .await
        .unwrap();
    let third = service
        .list(&TaskFilter::default().with_page(3, 10))
        .await
        .unwrap();

    let ids = |page: &TaskPage| page.tasks.iter().map(|t| t.id).collect::<Vec<_>>();
    assert_eq!(ids(&first.page), (1..=10).collect::<Vec<_>>());
    assert_eq!(ids(&second.page), (11..=20).collect::<Vec<_>>());
    assert_eq!(ids(&third.page), (21..=25).collect::<Vec<_>>());
    assert_eq!(third.page.pagination.total_pages, 3);
    assert_eq!(cache.live_keys().await.len(), 3);
}

#[tokio::test]
async fn test_page_beyond_last_is_empty_with_totals() {
    let (service, _, _) = create_service(numbered_dataset(5));

    let listed = service
        .list(&TaskFilter::default().with_page(4, 2))
        .await
        .unwrap();

    assert!(listed.page.tasks.is_empty());
    assert_eq!(listed.page.pagination.total_tasks, 5);
    assert_eq!(listed.page.pagination.total_pages, 3);
}

#[tokio::test]
async fn test_status_filter_and_pagination_combine() {
    let (service, _, _) = create_service(numbered_dataset(9));

    let listed = service
        .list(&TaskFilter::default().with_status("done").with_page(2, 3))
        .await
        .unwrap();

    assert_eq!(listed.page.tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![8]);
    assert_eq!(listed.page.pagination.total_tasks, 4);
    assert_eq!(listed.page.pagination.total_pages, 2);
}

#[tokio::test]
async fn test_cache_failure_falls_back_to_store() {
    let (service, repository, cache) = create_service(tes_dataset());
    cache.set_should_fail(true);

    let first = service.list(&TaskFilter::default()).await.unwrap();
    let second = service.list(&TaskFilter::default()).await.unwrap();

    assert_eq!(first.page.pagination.total_tasks, 2);
    assert!(!second.from_cache);
    assert_eq!(repository.fetch_calls(), 2);
}

#[tokio::test]
async fn test_corrupt_cache_entry_is_treated_as_miss() {
    let (service, repository, cache) = create_service(tes_dataset());
    let filter = TaskFilter::default();
    cache.insert_raw(&filter.cache_key(), "{not json", 30).await;

    let listed = service.list(&filter).await.unwrap();

    assert!(!listed.from_cache);
    assert_eq!(repository.fetch_calls(), 1);
    assert_eq!(cache.get(&filter.cache_key()).await.unwrap(), Some(listed.snapshot));
}

#[test]
fn test_snapshot_decoding() {
    let page = TaskPage::new(Vec::new(), Pagination::default(), 0);
    let snapshot = serde_json::to_string(&page).unwrap();

    let listed = ListedPage::from_snapshot(snapshot.clone()).unwrap();
    assert!(listed.from_cache);
    assert_eq!(listed.snapshot, snapshot);
    assert_eq!(listed.page, page);

    assert!(matches!(
        ListedPage::from_snapshot("{not json".to_string()),
        Err(CacheError::Corrupt { .. })
    ));
}

#[tokio::test]
async fn test_store_failure_surfaces_without_caching() {
    let (service, repository, cache) = create_service(tes_dataset());
    repository.set_should_fail(true);

    let result = service.list(&TaskFilter::default()).await;

    assert!(matches!(result, Err(DomainError::Store(StoreError::Unavailable { .. }))));
    assert_eq!(cache.set_calls(), 0);
}

#[tokio::test]
async fn test_get_task() {
    let mut tasks = tes_dataset();
    tasks.push(deleted_task(3));
    let (service, _, _) = create_service(tasks);

    assert_eq!(service.get(1).await.unwrap().id, 1);
    assert!(matches!(service.get(3).await, Err(DomainError::NotFound { .. })));
    assert!(matches!(service.get(99).await, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_create_task() {
    let (service, repository, _) = create_service(tes_dataset());

    let created = service
        .create(NewTask::new("write docs", "for the list endpoint", None, None, "alice"))
        .await
        .unwrap();

    assert_eq!(created.id, 3);
    assert_eq!(created.status.as_deref(), Some("pending"));
    assert_eq!(created.created_by.as_deref(), Some("alice"));
    assert_eq!(repository.all().await.len(), 3);
}

#[tokio::test]
async fn test_create_rejects_invalid_task() {
    let (service, repository, _) = create_service(Vec::new());

    let result = service
        .create(NewTask::new("ab", "short title", None, None, "alice"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { .. }))
    ));
    assert!(repository.all().await.is_empty());
}

#[tokio::test]
async fn test_update_task() {
    let (service, repository, _) = create_service(tes_dataset());

    service
        .update(1, TaskChanges::new(None, None, Some("done".into()), "bob"))
        .await
        .unwrap();

    let task = repository.all().await.into_iter().find(|t| t.id == 1).unwrap();
    assert_eq!(task.status.as_deref(), Some("done"));
    assert_eq!(task.title.as_deref(), Some("tes"));
    assert_eq!(task.updated_by.as_deref(), Some("bob"));
    assert!(task.updated_at.is_some());

    let missing = service
        .update(99, TaskChanges::new(None, None, Some("done".into()), "bob"))
        .await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_task_is_soft() {
    let (service, repository, _) = create_service(tes_dataset());

    service.delete(1).await.unwrap();

    assert!(matches!(service.get(1).await, Err(DomainError::NotFound { .. })));
    assert!(matches!(service.delete(1).await, Err(DomainError::NotFound { .. })));
    let stored = repository.all().await;
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().any(|t| t.id == 1 && t.is_deleted()));
}

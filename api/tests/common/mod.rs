//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::{Duration, TimeZone, Utc};

use tq_api::app::AppState;
use tq_core::domain::entities::task::Task;
use tq_core::domain::entities::user::User;
use tq_core::repositories::{MockTaskRepository, MockUserRepository};
use tq_core::services::auth::AuthService;
use tq_core::services::task::{InMemoryPageCache, TaskService, TaskServiceConfig};
use tq_core::services::token::{TokenService, TokenServiceConfig};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_USER: &str = "alice";
pub const TEST_PASSWORD: &str = "hunter22";

pub type TestState = AppState<MockTaskRepository, InMemoryPageCache, MockUserRepository>;

/// Handles to the in-memory collaborators behind a test app
pub struct TestContext {
    pub state: web::Data<TestState>,
    pub tasks: Arc<MockTaskRepository>,
    pub cache: Arc<InMemoryPageCache>,
    pub users: Arc<MockUserRepository>,
    pub tokens: Arc<TokenService>,
}

impl TestContext {
    pub async fn new(tasks: Vec<Task>) -> Self {
        let task_repository = Arc::new(MockTaskRepository::with_tasks(tasks));
        let cache = Arc::new(InMemoryPageCache::new());
        let users = Arc::new(MockUserRepository::new());
        let hash = bcrypt::hash(TEST_PASSWORD, 4).unwrap();
        users.insert(User::new(1, TEST_USER, hash)).await;

        let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET)));
        let task_service = Arc::new(TaskService::new(
            task_repository.clone(),
            cache.clone(),
            TaskServiceConfig::default(),
        ));
        let auth_service = Arc::new(AuthService::new(users.clone(), tokens.clone()));
        let state = web::Data::new(AppState::new(task_service, auth_service, tokens.clone()));

        Self {
            state,
            tasks: task_repository,
            cache,
            users,
            tokens,
        }
    }

    /// `Authorization` header value for the test user
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.tokens.issue(TEST_USER).unwrap())
    }

    /// `Authorization` header value carrying an already expired token
    pub fn expired_bearer(&self) -> String {
        let issued_at = Utc::now() - Duration::hours(48);
        format!("Bearer {}", self.tokens.issue_at(TEST_USER, issued_at).unwrap())
    }
}

/// Two undeleted tasks titled "tes", inserted in reverse due-date order
pub fn tes_dataset() -> Vec<Task> {
    vec![
        Task::new(2, "tes")
            .with_description("panjang penjelasannya UPDATED")
            .with_status("pending")
            .with_due_date(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
        Task::new(1, "tes")
            .with_description("panjang penjelasannya")
            .with_status("pending")
            .with_due_date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
    ]
}

/// `count` tasks with ascending due dates
pub fn numbered_dataset(count: i64) -> Vec<Task> {
    (1..=count)
        .map(|id| {
            Task::new(id, format!("task {}", id))
                .with_description(format!("description {}", id))
                .with_status("pending")
                .with_due_date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(id))
        })
        .collect()
}

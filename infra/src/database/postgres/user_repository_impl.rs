//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use tq_core::domain::entities::user::User;
use tq_core::errors::{DomainError, StoreError};
use tq_core::repositories::UserRepository;

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(r#"SELECT id, username, password FROM "user" WHERE username = $1"#)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up user: {}", e);
                DomainError::Store(StoreError::unavailable(e.to_string()))
            })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: i64 = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let username: Option<String> = row.try_get("username").map_err(|e| DomainError::Internal {
            message: format!("Failed to get username: {}", e),
        })?;
        let password: Option<String> = row.try_get("password").map_err(|e| DomainError::Internal {
            message: format!("Failed to get password: {}", e),
        })?;

        Ok(Some(User::new(
            id,
            username.unwrap_or_default(),
            password.unwrap_or_default(),
        )))
    }
}

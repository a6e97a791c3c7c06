//! Main authentication service implementation

use std::sync::Arc;
use tracing::{info, warn};

use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Outcome of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    /// Signed bearer token
    pub token: String,
    /// Identity read back from the issued token
    pub identity: String,
}

/// Authentication service for password login
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository used to look up users
    /// * `token_service` - Codec issuing tokens on success
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Verify credentials and issue a token
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResult)` - Credentials matched
    /// * `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    /// * `Err(ValidationError::RequiredField)` - Username or password empty
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<LoginResult> {
        if username.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            }
            .into());
        }
        if password.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }

        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) => user,
            None => {
                warn!(username = %username, "Login failed: unknown user");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !verify_password(password, &user.password_hash).await? {
            warn!(username = %username, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(&user.username)?;
        let claims = self.token_service.verify(&token).map_err(|e| DomainError::Internal {
            message: format!("Issued token did not verify: {}", e),
        })?;

        info!(username = %user.username, "User logged in");
        Ok(LoginResult {
            token,
            identity: claims.sub,
        })
    }
}

/// Check `password` against a bcrypt hash on the blocking pool.
///
/// An unreadable hash is reported as a mismatch.
async fn verify_password(password: &str, password_hash: &str) -> DomainResult<bool> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();

    tokio::task::spawn_blocking(move || {
        bcrypt::verify(&password, &password_hash).unwrap_or_else(|e| {
            warn!(error = %e, "Stored password hash is unreadable");
            false
        })
    })
    .await
    .map_err(|e| DomainError::Internal {
        message: format!("Password verification task failed: {}", e),
    })
}

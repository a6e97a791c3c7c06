use actix_web::{web, HttpResponse};
use validator::Validate;

use tq_core::repositories::{TaskRepository, UserRepository};
use tq_core::services::task::PageCache;

use crate::app::AppState;
use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::ApiError;

/// Handler for POST /login
///
/// Exchanges a username and password for a bearer token.
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "secret" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Login successful", "token": "eyJ...", "decode": "alice" }
/// ```
///
/// ## Errors
/// - 400 when a field is missing
/// - 401 "Invalid username or password"
pub async fn login<T, C, U>(
    state: web::Data<AppState<T, C, U>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    T: TaskRepository + 'static,
    C: PageCache + 'static,
    U: UserRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let result = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful".to_string(),
        token: result.token,
        decode: result.identity,
    }))
}

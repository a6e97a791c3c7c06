//! Application state and factory
//!
//! This module holds the shared application state and builds the Actix-web
//! application with every route wired to it.

use std::sync::Arc;

use actix_web::{error::JsonPayloadError, web, App, HttpRequest, HttpResponse};
use tq_core::repositories::{TaskRepository, UserRepository};
use tq_core::services::auth::AuthService;
use tq_core::services::task::{PageCache, TaskService};
use tq_core::services::token::TokenService;
use tq_shared::{error_codes, ErrorResponse, HealthResponse};

use crate::handlers::ApiError;
use crate::middleware::JwtAuth;
use crate::routes::auth::login;
use crate::routes::tasks::{create_task, delete_task, get_task, list_tasks, update_task};

/// Application state that holds shared services
pub struct AppState<T, C, U>
where
    T: TaskRepository,
    C: PageCache,
    U: UserRepository,
{
    pub task_service: Arc<TaskService<T, C>>,
    pub auth_service: Arc<AuthService<U>>,
    pub token_service: Arc<TokenService>,
}

impl<T, C, U> AppState<T, C, U>
where
    T: TaskRepository,
    C: PageCache,
    U: UserRepository,
{
    pub fn new(
        task_service: Arc<TaskService<T, C>>,
        auth_service: Arc<AuthService<U>>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            task_service,
            auth_service,
            token_service,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<T, C, U>(
    app_state: web::Data<AppState<T, C, U>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    T: TaskRepository + 'static,
    C: PageCache + 'static,
    U: UserRepository + 'static,
{
    let jwt_auth = JwtAuth::new(Arc::clone(&app_state.token_service));

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        .route("/login", web::post().to(login::<T, C, U>))
        // Task routes, all protected
        .service(
            web::scope("/tasks")
                .wrap(jwt_auth)
                .route("", web::get().to(list_tasks::<T, C, U>))
                .route("", web::post().to(create_task::<T, C, U>))
                .route("/{id}", web::get().to(get_task::<T, C, U>))
                .route("/{id}", web::put().to(update_task::<T, C, U>))
                .route("/{id}", web::delete().to(delete_task::<T, C, U>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Render malformed JSON bodies with the shared error shape
fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid request body: {}", error)).into()
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy("tq-api", env!("CARGO_PKG_VERSION")))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}

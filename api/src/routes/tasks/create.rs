use actix_web::{web, HttpResponse};
use validator::Validate;

use tq_core::repositories::{TaskRepository, UserRepository};
use tq_core::services::task::PageCache;

use crate::app::AppState;
use crate::dto::CreateTaskRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for POST /tasks
///
/// # Request Body
///
/// ```json
/// { "title": "tes", "description": "panjang penjelasannya", "due_date": "2024-01-01T00:00:00Z" }
/// ```
///
/// `title` (3-255 chars) and `description` are required; `status` defaults
/// to `pending`. The caller is recorded as `created_by`. Responds 201 with
/// the stored task.
pub async fn create_task<T, C, U>(
    auth: AuthContext,
    state: web::Data<AppState<T, C, U>>,
    request: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, ApiError>
where
    T: TaskRepository + 'static,
    C: PageCache + 'static,
    U: UserRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let task = state
        .task_service
        .create(request.into_new_task(&auth.username))
        .await?;

    Ok(HttpResponse::Created().json(task))
}

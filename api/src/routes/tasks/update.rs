use actix_web::{web, HttpResponse};
use validator::Validate;

use tq_core::repositories::{TaskRepository, UserRepository};
use tq_core::services::task::PageCache;

use crate::app::AppState;
use crate::dto::UpdateTaskRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

use super::parse_task_id;

/// Handler for PUT /tasks/{id}
///
/// Applies the provided fields and records the caller as `updated_by`.
/// Responds 204, or 404 when no undeleted task has the id.
pub async fn update_task<T, C, U>(
    auth: AuthContext,
    state: web::Data<AppState<T, C, U>>,
    path: web::Path<String>,
    request: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse, ApiError>
where
    T: TaskRepository + 'static,
    C: PageCache + 'static,
    U: UserRepository + 'static,
{
    let id = parse_task_id(&path)?;
    let request = request.into_inner();
    request.validate()?;

    state
        .task_service
        .update(id, request.into_changes(&auth.username))
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

use actix_web::{web, HttpResponse};

use tq_core::repositories::{TaskRepository, UserRepository};
use tq_core::services::task::PageCache;

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

use super::parse_task_id;

/// Handler for DELETE /tasks/{id}
///
/// Soft-deletes the task. Responds 204, or 404 when no undeleted task has
/// the id.
pub async fn delete_task<T, C, U>(
    auth: AuthContext,
    state: web::Data<AppState<T, C, U>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    T: TaskRepository + 'static,
    C: PageCache + 'static,
    U: UserRepository + 'static,
{
    let id = parse_task_id(&path)?;
    state.task_service.delete(id).await?;

    tracing::info!(task_id = id, username = %auth.username, "Task deleted via API");
    Ok(HttpResponse::NoContent().finish())
}

use actix_web::{web, HttpResponse};

use tq_core::repositories::{TaskRepository, UserRepository};
use tq_core::services::task::PageCache;

use crate::app::AppState;
use crate::handlers::ApiError;

use super::parse_task_id;

/// Handler for GET /tasks/{id}
///
/// Returns 400 for a non-numeric id and 404 when the task is missing or
/// deleted.
pub async fn get_task<T, C, U>(
    state: web::Data<AppState<T, C, U>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    T: TaskRepository + 'static,
    C: PageCache + 'static,
    U: UserRepository + 'static,
{
    let id = parse_task_id(&path)?;
    let task = state.task_service.get(id).await?;
    Ok(HttpResponse::Ok().json(task))
}

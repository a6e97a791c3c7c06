use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};

use tq_core::repositories::{TaskRepository, UserRepository};
use tq_core::services::task::PageCache;

use crate::app::AppState;
use crate::dto::ListTasksQuery;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /tasks
///
/// Lists one page of undeleted tasks. Optional query parameters: `status`
/// (exact match), `search` (case-insensitive substring of title or
/// description), `page` and `limit`. Malformed, repeated or missing paging
/// values fall back to page 1 and 10 per page; the first occurrence of a
/// repeated key wins.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "tasks": [{ "id": 1, "title": "tes", "description": "...", "status": "pending", "due_date": "..." }],
///     "pagination": { "current_page": 1, "total_pages": 1, "total_tasks": 1 }
/// }
/// ```
///
/// Identical requests within the cache TTL return the same body.
pub async fn list_tasks<T, C, U>(
    auth: AuthContext,
    state: web::Data<AppState<T, C, U>>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError>
where
    T: TaskRepository + 'static,
    C: PageCache + 'static,
    U: UserRepository + 'static,
{
    let filter = ListTasksQuery::from_query_string(req.query_string()).into_filter();
    let listed = state.task_service.list(&filter).await?;

    tracing::debug!(
        username = %auth.username,
        from_cache = listed.from_cache,
        total_tasks = listed.page.pagination.total_tasks,
        "Listed tasks"
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(listed.snapshot))
}

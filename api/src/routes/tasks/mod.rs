//! Task route handlers. Every route here sits behind `JwtAuth`.

pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

pub use create::create_task;
pub use delete::delete_task;
pub use detail::get_task;
pub use list::list_tasks;
pub use update::update_task;

use crate::handlers::ApiError;

/// Parse a task id path segment
pub(crate) fn parse_task_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid task id: {}", raw)))
}

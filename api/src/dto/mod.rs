//! Request and response bodies

pub mod auth;
pub mod task;

pub use auth::{LoginRequest, LoginResponse};
pub use task::{CreateTaskRequest, ListTasksQuery, UpdateTaskRequest};

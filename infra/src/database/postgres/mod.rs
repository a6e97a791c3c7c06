//! PostgreSQL repository implementations

pub mod task_repository_impl;
pub mod user_repository_impl;

pub use task_repository_impl::PgTaskRepository;
pub use user_repository_impl::PgUserRepository;

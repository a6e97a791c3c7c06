pub mod task;
pub mod user;

pub use task::{MockTaskRepository, TaskRepository};
pub use user::{MockUserRepository, UserRepository};

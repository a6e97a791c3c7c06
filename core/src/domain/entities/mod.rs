//! Domain entities representing core business objects.

pub mod task;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use task::{NewTask, Task, TaskChanges, DEFAULT_TASK_STATUS};
pub use token::{Claims, CLAIMS_VERSION};
pub use user::User;

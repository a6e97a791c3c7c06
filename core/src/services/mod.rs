//! Business services containing domain logic and use cases.

pub mod auth;
pub mod task;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, LoginResult};
pub use task::{
    InMemoryPageCache, ListedPage, PageCache, TaskQueryPlanner, TaskService, TaskServiceConfig,
};
pub use token::{TokenService, TokenServiceConfig};

//! # TaskQuery Core
//!
//! Core business logic and domain layer for the TaskQuery backend.
//! This crate contains domain entities, the token codec, the list query
//! planner, the cache-aside task service, repository interfaces, and the
//! error types shared by the outer layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, NewTask, Task, TaskChanges, User};
pub use domain::value_objects::{TaskFilter, TaskPage};
pub use errors::*;
pub use repositories::{TaskRepository, UserRepository};
pub use services::{AuthService, PageCache, TaskService, TokenService};

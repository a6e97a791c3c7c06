//! Shared utilities and common types for the TaskQuery server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures
//! - Pagination and response type definitions

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, PageMeta, Pagination};

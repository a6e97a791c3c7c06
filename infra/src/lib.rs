//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository and cache interfaces.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: PostgreSQL connection pool and repositories using SQLx
//! - **Cache**: Redis client and the task page cache built on it
//!
//! ## Features
//!
//! - `postgres`: Enable PostgreSQL database support (default)
//! - `redis-cache`: Enable Redis caching support (default)

// Re-export core types for convenience
pub use tq_core::errors::*;

/// Database module - PostgreSQL implementations using SQLx
#[cfg(feature = "postgres")]
pub mod database;

/// Cache module - Redis client and operations
#[cfg(feature = "redis-cache")]
pub mod cache;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration for infrastructure services, loaded through the shared crate.

    pub use tq_shared::config::{CacheConfig, DatabaseConfig};
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

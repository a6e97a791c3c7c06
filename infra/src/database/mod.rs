//! Database module for PostgreSQL implementations

pub mod connection;
pub mod postgres;


pub use connection::DatabasePool;
pub use postgres::{PgTaskRepository, PgUserRepository};

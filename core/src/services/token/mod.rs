//! Token service module for JWT management
//!
//! Issues signed bearer tokens for an identity and verifies presented
//! tokens. Tokens are stateless; nothing is persisted.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;

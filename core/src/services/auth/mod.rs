//! Authentication service module
//!
//! Password login that exchanges valid credentials for a bearer token.

mod service;


pub use service::{AuthService, LoginResult};

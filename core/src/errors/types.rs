//! Error types for authentication, token handling, validation and the
//! storage adapters.

use thiserror::Error;

/// Authentication and authorization failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header, or one without the `Bearer ` scheme
    #[error("Authorization missing")]
    AuthorizationMissing,

    /// A bearer token was presented but did not verify
    #[error("Authorization invalid")]
    AuthorizationInvalid,

    /// Unknown username or wrong password at login
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Token codec failures.
///
/// Every verification failure surfaces as `InvalidToken`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors for request payloads
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid length for field: {field} (min: {min}, max: {max}, actual: {actual})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Record store failures. Surfaced to callers as a generic retrieval failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }
}

/// Cache store failures. Never surfaced to callers; logged and bypassed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache unavailable: {message}")]
    Unavailable { message: String },

    #[error("Cached entry could not be decoded: {message}")]
    Corrupt { message: String },
}

impl CacheError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        CacheError::Unavailable {
            message: message.into(),
        }
    }

    pub fn corrupt(message: impl Into<String>) -> Self {
        CacheError::Corrupt {
            message: message.into(),
        }
    }
}

//! Mapping from domain errors to HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use tq_core::errors::{AuthError, DomainError};
use tq_shared::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Message returned for every rejected protected request
pub const UNAUTHORIZED_MESSAGE: &str = "Missing or invalid authorization token";

/// Message returned for a failed login
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Errors rendered by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid bearer token
    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,

    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    /// Anything the client cannot act on; the cause is logged, not returned
    #[error("An internal error occurred")]
    Internal,
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized | ApiError::InvalidCredentials => error_codes::UNAUTHORIZED,
            ApiError::BadRequest(_) => error_codes::BAD_REQUEST,
            ApiError::Validation(_) => error_codes::VALIDATION_ERROR,
            ApiError::NotFound(_) => error_codes::NOT_FOUND,
            ApiError::Internal => error_codes::INTERNAL_ERROR,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.code(), self.to_string()))
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Auth(AuthError::InvalidCredentials) => ApiError::InvalidCredentials,
            DomainError::Auth(_) | DomainError::Token(_) => ApiError::Unauthorized,
            DomainError::ValidationErr(e) => ApiError::Validation(e.to_string()),
            DomainError::NotFound { resource } => ApiError::NotFound(resource),
            DomainError::Store(e) => {
                tracing::error!(error = %e, "Record store failure");
                ApiError::Internal
            }
            DomainError::Internal { message } => {
                tracing::error!(error = %message, "Internal error");
                ApiError::Internal
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort_unstable();
        ApiError::Validation(format!("Invalid fields: {}", fields.join(", ")))
    }
}

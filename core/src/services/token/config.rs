//! Configuration for the token service

use jsonwebtoken::Algorithm;
use std::str::FromStr;
use tq_shared::config::auth::{JwtConfig, DEFAULT_JWT_SECRET, DEFAULT_TOKEN_EXPIRY_SECONDS};

use crate::errors::DomainError;

/// Algorithms accepted when verifying. All share the symmetric secret.
pub const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token lifetime in seconds
    pub token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.token_expiry_seconds = seconds;
        self
    }

    /// Build from the shared JWT configuration.
    ///
    /// Fails when the configured algorithm is unknown or outside the HMAC family.
    pub fn from_jwt_config(jwt: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&jwt.algorithm).map_err(|_| DomainError::Internal {
            message: format!("Unsupported JWT algorithm: {}", jwt.algorithm),
        })?;
        if !HMAC_ALGORITHMS.contains(&algorithm) {
            return Err(DomainError::Internal {
                message: format!("JWT algorithm {} is not an HMAC algorithm", jwt.algorithm),
            });
        }

        Ok(Self {
            jwt_secret: jwt.secret.clone(),
            algorithm,
            token_expiry_seconds: jwt.token_expiry,
        })
    }
}

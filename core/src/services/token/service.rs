//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domain::entities::token::{Claims, CLAIMS_VERSION};
use crate::errors::{DomainError, TokenError};

use super::config::{TokenServiceConfig, HMAC_ALGORITHMS};

/// Service issuing and verifying HMAC-signed JWTs
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked by hand against an injectable clock with no leeway.
        let mut validation = Validation::new(config.algorithm);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Lifetime of issued tokens
    pub fn token_lifetime(&self) -> Duration {
        Duration::seconds(self.config.token_expiry_seconds)
    }

    /// Issues a token for `identity`, valid from now for the configured lifetime
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact JWT
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue(&self, identity: &str) -> Result<String, DomainError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issues a token as if the current time were `now`
    pub fn issue_at(&self, identity: &str, now: DateTime<Utc>) -> Result<String, DomainError> {
        let claims = Claims::new(identity, now, self.token_lifetime());
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The compact JWT, without any `Bearer ` prefix
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::InvalidToken)` - Malformed, wrongly signed, foreign algorithm,
    ///   unexpected claim shape, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!("Token rejected: {:?}", e.kind());
                DomainError::Token(TokenError::InvalidToken)
            })?;
        let claims = token_data.claims;

        if claims.ver != CLAIMS_VERSION {
            debug!("Token rejected: claim version {}", claims.ver);
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        if claims.is_expired_at(now.timestamp()) {
            debug!("Token rejected: expired at {}", claims.exp);
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        Ok(claims)
    }
}

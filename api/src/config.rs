//! Server configuration assembled from the environment

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tq_shared::config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig,
};

/// Configuration problems detected at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in production")]
    DefaultJwtSecret,

    #[error("JWT token expiry must be positive, got {0}")]
    InvalidTokenExpiry(i64),

    #[error("Task list cache TTL must be positive")]
    InvalidCacheTtl,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub environment: Environment,
}

impl From<AppConfig> for Config {
    fn from(app: AppConfig) -> Self {
        Self {
            database: app.database,
            cache: app.cache,
            auth: app.auth,
            server: app.server,
            logging: app.logging,
            environment: app.environment,
        }
    }
}

impl Config {
    /// Load every section from the environment and validate the result
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from(AppConfig::from_env());
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server must not start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultJwtSecret);
        }
        if self.auth.jwt.token_expiry <= 0 {
            return Err(ConfigError::InvalidTokenExpiry(self.auth.jwt.token_expiry));
        }
        if self.cache.list_ttl == 0 {
            return Err(ConfigError::InvalidCacheTtl);
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(environment: Environment) -> Config {
        Config::from(AppConfig {
            environment,
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_development_accepts_default_secret() {
        assert_eq!(config_for(Environment::Development).validate(), Ok(()));
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let mut config = config_for(Environment::Production);
        assert_eq!(config.validate(), Err(ConfigError::DefaultJwtSecret));

        config.auth.jwt.secret = "a-real-secret".to_string();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let mut config = config_for(Environment::Development);
        config.auth.jwt.token_expiry = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidTokenExpiry(0)));

        let mut config = config_for(Environment::Development);
        config.cache.list_ttl = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidCacheTtl));
    }
}

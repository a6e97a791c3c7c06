//! Token claims for stateless bearer authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Version of the claim layout below. Tokens carrying any other version are rejected.
pub const CLAIMS_VERSION: u16 = 1;

/// Claims structure for the JWT payload.
///
/// The shape is closed: unknown claims fail deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Claims {
    /// Subject (the username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Claim layout version
    pub ver: u16,
}

impl Claims {
    /// Creates claims for `identity` issued at `issued_at` and valid for `lifetime`
    pub fn new(identity: impl Into<String>, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            sub: identity.into(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
            ver: CLAIMS_VERSION,
        }
    }

    /// The identity the token was issued for
    pub fn identity(&self) -> &str {
        &self.sub
    }

    /// A token is valid only while `now < exp`; `exp == now` counts as expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

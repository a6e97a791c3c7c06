//! User entity used for login.

use serde::{Deserialize, Serialize};

/// A user able to log in and obtain a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    /// Login name, also the identity carried in issued tokens
    pub username: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

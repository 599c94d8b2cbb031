//! User model
//!
//! A registered account holder. Users are immutable once created.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::{hash_password, verify_password, PasswordDigest};

/// A registered account holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,

    /// Phone number or email used to log in; not guaranteed unique
    pub identifier: String,

    /// Digest of the password, never the plaintext
    pub password_digest: PasswordDigest,
}

impl User {
    /// Create a new user, hashing the plaintext password
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        identifier: impl Into<String>,
        password: &str,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            identifier: identifier.into(),
            password_digest: hash_password(password),
        }
    }

    /// Check a plaintext password against this user's digest
    pub fn check_password(&self, password: &str) -> bool {
        verify_password(password, &self.password_digest)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} | {}", self.first_name, self.last_name, self.identifier)
    }
}

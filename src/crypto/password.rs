//! Password digests
//!
//! Passwords are stored as the lowercase hex SHA-256 of their UTF-8 bytes.
//! The digest is unsalted and single-pass so that it stays byte-compatible
//! with existing user artifacts. It is NOT suitable for production use;
//! a salted, memory-hard scheme (Argon2id) would change the stored format
//! and must be introduced as an explicit migration.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{BudgetError, BudgetResult};

/// Length of a hex-encoded SHA-256 digest
pub const DIGEST_HEX_LEN: usize = 64;

/// A hex-encoded one-way password digest
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Parse a stored digest, rejecting anything that is not 64 hex characters
    pub fn parse(s: &str) -> BudgetResult<Self> {
        if s.len() != DIGEST_HEX_LEN || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BudgetError::Hashing(format!(
                "stored password digest must be {} hex characters",
                DIGEST_HEX_LEN
            )));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PasswordDigest {
    type Error = BudgetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PasswordDigest> for String {
    fn from(digest: PasswordDigest) -> Self {
        digest.0
    }
}

// Digests are not secrets, but there is no reason to spray them into logs
impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PasswordDigest({}…)", &self.0[..8])
    }
}

/// Hash a plaintext password
pub fn hash_password(plaintext: &str) -> PasswordDigest {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    PasswordDigest(hex::encode(hasher.finalize()))
}

/// Check a plaintext password against a stored digest
pub fn verify_password(plaintext: &str, digest: &PasswordDigest) -> bool {
    hash_password(plaintext) == *digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // sha256("abc")
        assert_eq!(
            hash_password("abc").as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_is_lowercase_hex_of_fixed_length() {
        let digest = hash_password("secret1");
        assert_eq!(digest.as_str().len(), DIGEST_HEX_LEN);
        assert!(digest
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_ne!(digest.as_str(), "secret1");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(hash_password("hunter2"), hash_password("hunter2"));
    }

    #[test]
    fn test_verify() {
        let digest = hash_password("secret1");
        assert!(verify_password("secret1", &digest));
        assert!(!verify_password("secret2", &digest));
        assert!(!verify_password("", &digest));
    }

    #[test]
    fn test_empty_and_unicode_passwords() {
        let empty = hash_password("");
        assert!(verify_password("", &empty));

        let unicode = hash_password("pässwörd🔑");
        assert!(verify_password("pässwörd🔑", &unicode));
        assert_ne!(empty, unicode);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(PasswordDigest::parse("abc").is_err());
        assert!(PasswordDigest::parse(&"z".repeat(64)).is_err());

        let err = PasswordDigest::parse("plaintext").unwrap_err();
        assert!(matches!(err, BudgetError::Hashing(_)));
    }

    #[test]
    fn test_parse_normalizes_case() {
        let digest = hash_password("abc");
        let upper = digest.as_str().to_ascii_uppercase();
        assert_eq!(PasswordDigest::parse(&upper).unwrap(), digest);
    }

    #[test]
    fn test_serialization() {
        let digest = hash_password("abc");
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", digest.as_str()));

        let back: PasswordDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);

        assert!(serde_json::from_str::<PasswordDigest>("\"not-a-digest\"").is_err());
    }
}

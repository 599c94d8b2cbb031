//! Cryptographic functions for budget-manager
//!
//! Provides the one-way password digest used for login and a zero-on-drop
//! string for plaintext passwords held by the shell.

pub mod password;
pub mod secure_memory;

pub use password::{hash_password, verify_password, PasswordDigest};
pub use secure_memory::SecureString;

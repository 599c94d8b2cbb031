//! Session state
//!
//! Tracks at most one authenticated user. A `Session` is an ordinary value
//! owned by the caller and passed to the operations that need authorization.

use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::User;

use super::user::UserService;

/// The currently authenticated user, if any
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to log in.
    ///
    /// On success the authenticated user replaces any previous one. On
    /// failure the existing session is left untouched.
    pub fn login(
        &mut self,
        users: &UserService<'_>,
        identifier: &str,
        password: &str,
    ) -> BudgetResult<bool> {
        match users.authenticate(identifier, password)? {
            Some(user) => {
                info!(user = %user, "logged in");
                self.user = Some(user);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Forget the current user
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user, "logged out");
        }
    }

    /// The logged-in user, if any
    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The logged-in user, or [`BudgetError::NoActiveSession`]
    pub fn require(&self) -> BudgetResult<&User> {
        self.user.as_ref().ok_or(BudgetError::NoActiveSession)
    }
}

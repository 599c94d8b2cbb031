//! User service
//!
//! Registration, lookup and password authentication.

use tracing::{debug, info};

use crate::error::BudgetResult;
use crate::models::User;
use crate::storage::Storage;

/// Service for user management
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user.
    ///
    /// Identifiers are not checked for uniqueness.
    pub fn register(
        &self,
        first_name: &str,
        last_name: &str,
        identifier: &str,
        password: &str,
    ) -> BudgetResult<User> {
        let user = User::new(first_name, last_name, identifier, password);
        self.storage.users.add(user.clone())?;

        info!(user = %user, "user registered");
        Ok(user)
    }

    /// Find the first registered user with this identifier
    pub fn find_by_identifier(&self, identifier: &str) -> BudgetResult<Option<User>> {
        self.storage.users.find_by_identifier(identifier)
    }

    /// Authenticate by identifier and password.
    ///
    /// Returns the first user, in registration order, whose identifier and
    /// password both match. `None` covers both an unknown identifier and a
    /// wrong password.
    pub fn authenticate(&self, identifier: &str, password: &str) -> BudgetResult<Option<User>> {
        let user = self
            .storage
            .users
            .find_first(|u| u.identifier == identifier && u.check_password(password))?;

        if user.is_none() {
            debug!("authentication failed");
        }
        Ok(user)
    }
}

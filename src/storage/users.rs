//! User repository for JSON storage
//!
//! Manages loading and saving registered users to users.json

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::BudgetError;
use crate::models::User;

use super::file_io::{
    check_format_version, default_format_version, read_json_optional, write_json_atomic,
};
use super::ArtifactStatus;

/// Serializable user data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserData {
    #[serde(default = "default_format_version")]
    version: u32,
    users: Vec<User>,
}

/// Repository for user persistence, kept in insertion order
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<Vec<User>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing artifact
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load users from disk.
    ///
    /// A missing file yields an empty store. A corrupt or unsupported file also
    /// yields an empty store, with a warning, so startup can continue.
    pub fn load(&self) -> Result<ArtifactStatus, BudgetError> {
        let (users, status) = match self.read_artifact() {
            Ok(Some(users)) => {
                let count = users.len();
                (users, ArtifactStatus::Loaded(count))
            }
            Ok(None) => {
                info!(path = %self.path.display(), "user data file not found, starting empty");
                (Vec::new(), ArtifactStatus::Missing)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to load user data, starting empty");
                (Vec::new(), ArtifactStatus::Recovered(e.to_string()))
            }
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = users;

        debug!(count = data.len(), "loaded users");
        Ok(status)
    }

    fn read_artifact(&self) -> Result<Option<Vec<User>>, BudgetError> {
        match read_json_optional::<UserData, _>(&self.path)? {
            Some(file_data) => {
                check_format_version(&self.path, file_data.version)?;
                Ok(Some(file_data.users))
            }
            None => Ok(None),
        }
    }

    /// Save all users to disk, replacing the previous snapshot
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = UserData {
            version: default_format_version(),
            users: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)?;

        debug!(count = data.len(), path = %self.path.display(), "saved users");
        Ok(())
    }

    /// Append a user
    pub fn add(&self, user: User) -> Result<(), BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(user);
        Ok(())
    }

    /// Find the first user (in insertion order) with this identifier
    pub fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, BudgetError> {
        self.find_first(|u| u.identifier == identifier)
    }

    /// Find the first user (in insertion order) matching `predicate`
    pub fn find_first<P>(&self, predicate: P) -> Result<Option<User>, BudgetError>
    where
        P: Fn(&User) -> bool,
    {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|u| predicate(u)).cloned())
    }

    /// Count users
    pub fn count(&self) -> Result<usize, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

//! User directory service

use crate::core::models::{NewUser, User};
use crate::storage::database::Database;
use crate::utils::error::{Result, VaultError};
use std::sync::Arc;
use tracing::debug;

/// Directory of registered users
///
/// Read-mostly: accounts are created through registration and never updated
/// or deleted through the exposed surface.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    db: Arc<Database>,
}

impl UserDirectory {
    /// Create a new user directory
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>> {
        self.db.list_users().await
    }

    /// Resolve a batch of user ids, all-or-nothing
    ///
    /// Fails when the fetched set's cardinality differs from the requested
    /// count, which catches both missing ids and duplicates collapsed by the
    /// `IN` query. Callers use this as the "all referenced users exist"
    /// trust boundary.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>> {
        let users = self.db.find_users_by_ids(ids).await?;

        if users.len() != ids.len() {
            debug!(
                "User batch lookup shortfall: requested {}, found {}",
                ids.len(),
                users.len()
            );
            return Err(VaultError::not_found("trusted or not found users"));
        }

        Ok(users)
    }

    /// Find a user by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        self.db.find_user_by_id(id).await
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.db.find_user_by_email(email).await
    }

    /// Persist a new user
    ///
    /// `data.password` must already be a digest by the time this is called.
    pub async fn create(&self, data: NewUser) -> Result<User> {
        self.db.insert_user(&data).await
    }
}

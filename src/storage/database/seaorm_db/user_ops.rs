use crate::core::models::{NewUser, User};
use crate::utils::error::{Result, VaultError};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find user by id
    pub async fn find_user_by_id(&self, user_id: i32) -> Result<Option<User>> {
        debug!("Finding user by id: {}", user_id);

        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(user_model.map(user::Model::into_domain))
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(user_model.map(user::Model::into_domain))
    }

    /// Find all users whose id is in the given set
    ///
    /// Returns whatever exists; the all-or-nothing contract lives in the
    /// directory service, not here.
    pub async fn find_users_by_ids(&self, ids: &[i32]) -> Result<Vec<User>> {
        debug!("Finding users by ids: {:?}", ids);

        let user_models = entities::User::find()
            .filter(user::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(user_models
            .into_iter()
            .map(user::Model::into_domain)
            .collect())
    }

    /// Persist a new user row
    pub async fn insert_user(&self, user: &NewUser) -> Result<User> {
        debug!("Creating user: {}", user.email);

        let now = chrono::Utc::now();
        let active_model = user::Model::from_new_user(user, now);

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(model.into_domain())
    }

    /// List all users
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let user_models = entities::User::find()
            .all(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(user_models
            .into_iter()
            .map(user::Model::into_domain)
            .collect())
    }
}

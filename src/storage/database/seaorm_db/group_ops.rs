use crate::core::models::{Document, Group, User};
use crate::utils::error::{Result, VaultError};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, document, group, group_document, group_user, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// List all groups without loading relations
    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        let group_models = entities::Group::find()
            .all(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(group_models
            .into_iter()
            .map(group::Model::into_domain)
            .collect())
    }

    /// Find a group with its user members loaded
    pub async fn find_group_with_users(&self, group_id: i32) -> Result<Option<(Group, Vec<User>)>> {
        debug!("Finding group {} with users", group_id);

        let Some(group_model) = self.find_group_model(group_id).await? else {
            return Ok(None);
        };

        let users = self.related_users(&group_model).await?;
        Ok(Some((group_model.into_domain(), users)))
    }

    /// Find a group with its document members loaded
    pub async fn find_group_with_documents(
        &self,
        group_id: i32,
    ) -> Result<Option<(Group, Vec<Document>)>> {
        debug!("Finding group {} with documents", group_id);

        let Some(group_model) = self.find_group_model(group_id).await? else {
            return Ok(None);
        };

        let documents = self.related_documents(&group_model).await?;
        Ok(Some((group_model.into_domain(), documents)))
    }

    /// Find a group with both membership relations loaded
    pub async fn find_group_full(
        &self,
        group_id: i32,
    ) -> Result<Option<(Group, Vec<User>, Vec<Document>)>> {
        debug!("Finding group {} with all relations", group_id);

        let Some(group_model) = self.find_group_model(group_id).await? else {
            return Ok(None);
        };

        let users = self.related_users(&group_model).await?;
        let documents = self.related_documents(&group_model).await?;
        Ok(Some((group_model.into_domain(), users, documents)))
    }

    /// Persist a new group row
    pub async fn insert_group(&self, name: &str) -> Result<Group> {
        debug!("Creating group: {}", name);

        let now = chrono::Utc::now();
        let model = group::Model::new_row(name, now)
            .insert(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(model.into_domain())
    }

    /// Append user associations to a group
    ///
    /// The composite primary key makes duplicate rows unrepresentable, so
    /// re-adding an existing member is an idempotent no-op at this layer.
    pub async fn add_group_users(&self, group_id: i32, user_ids: &[i32]) -> Result<()> {
        debug!("Adding users {:?} to group {}", user_ids, group_id);

        let rows = user_ids
            .iter()
            .map(|user_id| group_user::Model::new_row(group_id, *user_id));

        entities::GroupUser::insert_many(rows)
            .on_conflict(
                OnConflict::columns([group_user::Column::GroupId, group_user::Column::UserId])
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(())
    }

    /// Append document associations to a group
    pub async fn add_group_documents(&self, group_id: i32, document_ids: &[i32]) -> Result<()> {
        debug!("Adding documents {:?} to group {}", document_ids, group_id);

        let rows = document_ids
            .iter()
            .map(|document_id| group_document::Model::new_row(group_id, *document_id));

        entities::GroupDocument::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    group_document::Column::GroupId,
                    group_document::Column::DocumentId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(())
    }

    async fn find_group_model(&self, group_id: i32) -> Result<Option<group::Model>> {
        entities::Group::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(VaultError::Database)
    }

    async fn related_users(&self, group_model: &group::Model) -> Result<Vec<User>> {
        let users = group_model
            .find_related(entities::User)
            .all(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(users.into_iter().map(user::Model::into_domain).collect())
    }

    async fn related_documents(&self, group_model: &group::Model) -> Result<Vec<Document>> {
        let documents = group_model
            .find_related(entities::Document)
            .all(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(documents
            .into_iter()
            .map(document::Model::into_domain)
            .collect())
    }
}

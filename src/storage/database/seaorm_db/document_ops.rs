use crate::core::models::Document;
use crate::utils::error::{Result, VaultError};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, document};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find a document by its stored filename
    pub async fn find_document_by_filename(&self, filename: &str) -> Result<Option<Document>> {
        debug!("Finding document by filename: {}", filename);

        let document_model = entities::Document::find()
            .filter(document::Column::Filename.eq(filename))
            .one(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(document_model.map(document::Model::into_domain))
    }

    /// Find all documents whose id is in the given set
    pub async fn find_documents_by_ids(&self, ids: &[i32]) -> Result<Vec<Document>> {
        debug!("Finding documents by ids: {:?}", ids);

        let document_models = entities::Document::find()
            .filter(document::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(document_models
            .into_iter()
            .map(document::Model::into_domain)
            .collect())
    }

    /// Persist a new document row
    pub async fn insert_document(
        &self,
        owner_id: i32,
        filename: &str,
        originalname: &str,
        digital_signature: &str,
    ) -> Result<Document> {
        debug!("Creating document {} for user {}", filename, owner_id);

        let now = chrono::Utc::now();
        let active_model =
            document::Model::new_row(owner_id, filename, originalname, digital_signature, now);

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(model.into_domain())
    }

    /// List all documents, system-wide
    pub async fn list_documents(&self) -> Result<Vec<Document>> {
        let document_models = entities::Document::find()
            .all(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(document_models
            .into_iter()
            .map(document::Model::into_domain)
            .collect())
    }

    /// List documents owned by one user
    pub async fn list_documents_for_owner(&self, owner_id: i32) -> Result<Vec<Document>> {
        let document_models = entities::Document::find()
            .filter(document::Column::UserId.eq(owner_id))
            .all(&self.db)
            .await
            .map_err(VaultError::Database)?;

        Ok(document_models
            .into_iter()
            .map(document::Model::into_domain)
            .collect())
    }
}

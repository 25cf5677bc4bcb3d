//! Document registry service

use crate::core::models::Document;
use crate::storage::database::Database;
use crate::storage::files::DocumentStore;
use crate::utils::error::{Result, VaultError};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use super::users::UserDirectory;

/// Registry of uploaded documents and their blobs
#[derive(Debug, Clone)]
pub struct DocumentRegistry {
    db: Arc<Database>,
    users: Arc<UserDirectory>,
    store: Arc<DocumentStore>,
}

impl DocumentRegistry {
    /// Create a new document registry
    pub fn new(db: Arc<Database>, users: Arc<UserDirectory>, store: Arc<DocumentStore>) -> Self {
        Self { db, users, store }
    }

    /// List all documents, system-wide
    ///
    /// Deliberately unfiltered: this is the shared listing, distinct from
    /// the per-owner listing below.
    pub async fn list(&self) -> Result<Vec<Document>> {
        self.db.list_documents().await
    }

    /// List documents owned by one user
    pub async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<Document>> {
        self.db.list_documents_for_owner(owner_id).await
    }

    /// Find a document by its stored filename
    pub async fn find_by_filename(&self, filename: &str) -> Result<Document> {
        self.db
            .find_document_by_filename(filename)
            .await?
            .ok_or_else(|| VaultError::NotFound(format!("Not found file {}", filename)))
    }

    /// Resolve a batch of document ids, all-or-nothing
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Document>> {
        let documents = self.db.find_documents_by_ids(ids).await?;

        if documents.len() != ids.len() {
            debug!(
                "Document batch lookup shortfall: requested {}, found {}",
                ids.len(),
                documents.len()
            );
            return Err(VaultError::not_found("trusted or not found documents"));
        }

        Ok(documents)
    }

    /// Register a document row for an already-stored blob
    ///
    /// The owner must resolve; a document is never created without one.
    pub async fn create(
        &self,
        owner_id: i32,
        filename: &str,
        originalname: &str,
        digital_signature: &str,
    ) -> Result<Document> {
        let owner = self
            .users
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| VaultError::entity_not_found("User", owner_id))?;

        let document = self
            .db
            .insert_document(owner.id, filename, originalname, digital_signature)
            .await?;

        info!(
            "Document {} registered for user {}",
            document.filename, owner.id
        );
        Ok(document)
    }

    /// Store an uploaded PDF and register it under a fresh stored filename
    pub async fn create_upload(
        &self,
        owner_id: i32,
        originalname: &str,
        digital_signature: &str,
        content: &[u8],
    ) -> Result<Document> {
        // Resolve the owner before touching the blob store.
        let owner = self
            .users
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| VaultError::entity_not_found("User", owner_id))?;

        let filename = DocumentStore::generate_filename(originalname);
        self.store.store(&filename, content).await?;

        let document = self
            .db
            .insert_document(owner.id, &filename, originalname, digital_signature)
            .await?;

        info!(
            "Document {} uploaded for user {} ({} bytes)",
            document.filename,
            owner.id,
            content.len()
        );
        Ok(document)
    }

    /// Locate the blob for a stored filename
    ///
    /// The metadata lookup runs first so an unknown filename fails with the
    /// registry's NotFound before the blob store is touched.
    pub async fn download(&self, filename: &str) -> Result<(Document, PathBuf)> {
        let document = self.find_by_filename(filename).await?;
        let path = self.store.path_for(&document.filename);
        Ok((document, path))
    }
}

//! Local file system blob store for uploaded documents

use crate::utils::error::{Result, VaultError};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use uuid::Uuid;

/// Blob store rooted at a fixed documents directory
///
/// Blob paths are derived deterministically from the stored filename; the
/// store knows nothing about document metadata.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    base_path: PathBuf,
}

impl DocumentStore {
    /// Create a new document store, creating the root directory if needed
    pub async fn new(base_path: &str) -> Result<Self> {
        let path = PathBuf::from(base_path);

        if !path.exists() {
            fs::create_dir_all(&path).await.map_err(|e| {
                VaultError::FileStorage(format!("Failed to create storage directory: {}", e))
            })?;
        }

        info!("Document store initialized at: {}", path.display());
        Ok(Self { base_path: path })
    }

    /// Generate a collision-resistant stored filename
    ///
    /// Keeps the original name's extension so content-type detection on the
    /// download path keeps working. Uploads are PDF-only, so a missing
    /// extension falls back to `pdf`.
    pub fn generate_filename(originalname: &str) -> String {
        let extension = Path::new(originalname)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("pdf");

        format!("{}.{}", Uuid::new_v4(), extension)
    }

    /// Path of the blob for a stored filename
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.base_path.join(filename)
    }

    /// Write a blob under the given stored filename
    pub async fn store(&self, filename: &str, content: &[u8]) -> Result<()> {
        let file_path = self.path_for(filename);

        let mut file = fs::File::create(&file_path)
            .await
            .map_err(|e| VaultError::FileStorage(format!("Failed to create file: {}", e)))?;

        file.write_all(content)
            .await
            .map_err(|e| VaultError::FileStorage(format!("Failed to write file: {}", e)))?;

        debug!("Blob stored: {}", filename);
        Ok(())
    }

    /// Check if a blob exists
    pub async fn exists(&self, filename: &str) -> bool {
        fs::try_exists(self.path_for(filename))
            .await
            .unwrap_or(false)
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        if !self.base_path.exists() {
            return Err(VaultError::FileStorage(
                "Storage directory does not exist".to_string(),
            ));
        }

        let test_file = self.base_path.join(".health_check");
        fs::write(&test_file, b"health_check")
            .await
            .map_err(|e| VaultError::FileStorage(format!("Storage not writable: {}", e)))?;

        let _ = fs::remove_file(&test_file).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_filename_keeps_extension() {
        let filename = DocumentStore::generate_filename("contract.pdf");
        assert!(filename.ends_with(".pdf"));
        assert_ne!(filename, "contract.pdf");
    }

    #[test]
    fn test_generate_filename_unique() {
        let a = DocumentStore::generate_filename("contract.pdf");
        let b = DocumentStore::generate_filename("contract.pdf");
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_filename_uses_last_extension() {
        let filename = DocumentStore::generate_filename("archive.tar.pdf");
        assert!(filename.ends_with(".pdf"));
        assert!(!filename.contains("tar.pdf."));
    }

    #[test]
    fn test_generate_filename_without_extension_defaults_to_pdf() {
        let filename = DocumentStore::generate_filename("contract");
        assert!(filename.ends_with(".pdf"));
    }

    #[tokio::test]
    async fn test_store_and_path_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        store.store("a.pdf", b"%PDF-1.4 test").await.unwrap();

        assert!(store.exists("a.pdf").await);
        let content = tokio::fs::read(store.path_for("a.pdf")).await.unwrap();
        assert_eq!(content, b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        assert!(store.health_check().await.is_ok());
    }
}

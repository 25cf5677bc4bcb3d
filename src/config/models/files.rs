//! Uploaded document storage configuration

/// Blob store configuration for uploaded PDFs
#[derive(Debug, Clone)]
pub struct FilesConfig {
    /// Directory documents are stored under
    pub documents_root: String,
}

impl FilesConfig {
    /// Load from `DOCUMENTS_ROOT`, defaulting to the conventional location
    pub fn from_env() -> Self {
        Self {
            documents_root: std::env::var("DOCUMENTS_ROOT")
                .unwrap_or_else(|_| "public/documents".to_string()),
        }
    }

    /// Validate files configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.documents_root.trim().is_empty() {
            return Err("Documents root cannot be empty".to_string());
        }

        Ok(())
    }
}

//! Storage layer for the backend
//!
//! This module provides relational persistence and the document blob store.

/// Database storage module
pub mod database;
/// File storage module
pub mod files;

use crate::config::Config;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer that orchestrates all storage backends
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
    /// Document blob store
    pub files: Arc<files::DocumentStore>,
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);

        debug!("Initializing document store");
        let files = Arc::new(files::DocumentStore::new(&config.files.documents_root).await?);

        info!("Storage layer initialized successfully");

        Ok(Self { database, files })
    }

    /// Assemble a storage layer from already-built backends
    pub fn from_parts(database: Arc<database::Database>, files: Arc<files::DocumentStore>) -> Self {
        Self { database, files }
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        self.database.migrate().await
    }

    /// Health check for all storage backends
    pub async fn health_check(&self) -> Result<StorageHealthStatus> {
        let mut status = StorageHealthStatus {
            database: false,
            files: false,
            overall: false,
        };

        match self.database.health_check().await {
            Ok(()) => status.database = true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
            }
        }

        match self.files.health_check().await {
            Ok(()) => status.files = true,
            Err(e) => {
                warn!("Document store health check failed: {}", e);
            }
        }

        status.overall = status.database && status.files;

        Ok(status)
    }
}

/// Storage health status
#[derive(Debug, Clone, serde::Serialize)]
pub struct StorageHealthStatus {
    /// Database health status
    pub database: bool,
    /// Document store health status
    pub files: bool,
    /// Overall health status
    pub overall: bool,
}

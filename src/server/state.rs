//! Application state shared across HTTP handlers

use crate::auth::JwtHandler;
use crate::config::Config;
use crate::services::{AuthService, DocumentRegistry, GroupCoordinator, UserDirectory};
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across worker threads.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Session token handler
    pub jwt: Arc<JwtHandler>,
    /// Registration and login orchestration
    pub auth: Arc<AuthService>,
    /// User directory
    pub users: Arc<UserDirectory>,
    /// Document registry
    pub documents: Arc<DocumentRegistry>,
    /// Group coordinator
    pub groups: Arc<GroupCoordinator>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
}

impl AppState {
    /// Create a new AppState from already-wired components
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Config,
        jwt: Arc<JwtHandler>,
        auth: Arc<AuthService>,
        users: Arc<UserDirectory>,
        documents: Arc<DocumentRegistry>,
        groups: Arc<GroupCoordinator>,
        storage: Arc<StorageLayer>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            jwt,
            auth,
            users,
            documents,
            groups,
            storage,
        }
    }
}

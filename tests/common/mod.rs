//! Shared test fixtures
//!
//! Every test gets its own in-memory SQLite database with migrations applied
//! and a temporary blob store, wired through the same constructors the
//! server uses.

// Each test binary compiles this module separately and uses a different
// subset of it.
#![allow(dead_code)]

use docvault::auth::JwtHandler;
use docvault::config::{AuthConfig, Config, DatabaseConfig, FilesConfig, ServerConfig};
use docvault::server::AppState;
use docvault::services::{
    AuthService, DocumentRegistry, GroupCoordinator, RegisterRequest, UserDirectory,
};
use docvault::storage::database::Database;
use docvault::storage::files::DocumentStore;
use docvault::storage::StorageLayer;
use std::sync::Arc;
use tempfile::TempDir;

/// Secret long enough to pass config validation
pub const TEST_SECRET: &str = "test-secret-that-is-at-least-32-characters-long";

/// A fully wired backend over throwaway storage
pub struct TestBackend {
    pub state: AppState,
    pub users: Arc<UserDirectory>,
    pub documents: Arc<DocumentRegistry>,
    pub groups: Arc<GroupCoordinator>,
    pub auth: Arc<AuthService>,
    // Held so the blob directory outlives the test.
    _blob_dir: TempDir,
}

/// Build a backend over in-memory SQLite and a temp blob directory
pub async fn test_backend() -> TestBackend {
    let database = Arc::new(
        Database::from_url("sqlite::memory:")
            .await
            .expect("connect to in-memory sqlite"),
    );
    database.migrate().await.expect("run migrations");

    let blob_dir = tempfile::tempdir().expect("create temp blob dir");
    let files = Arc::new(
        DocumentStore::new(blob_dir.path().to_str().unwrap())
            .await
            .expect("create document store"),
    );

    let storage = Arc::new(StorageLayer::from_parts(database.clone(), files.clone()));

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            workers: Some(1),
        },
        database: DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            name: "test".to_string(),
            user: "test".to_string(),
            password: "test".to_string(),
            max_connections: 1,
            connection_timeout: 5,
        },
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            jwt_expiration: 3600,
        },
        files: FilesConfig {
            documents_root: blob_dir.path().to_string_lossy().into_owned(),
        },
    };

    let jwt = Arc::new(JwtHandler::new(&config.auth));
    let users = Arc::new(UserDirectory::new(database.clone()));
    let documents = Arc::new(DocumentRegistry::new(
        database.clone(),
        users.clone(),
        files,
    ));
    let groups = Arc::new(GroupCoordinator::new(
        database,
        users.clone(),
        documents.clone(),
    ));
    let auth = Arc::new(AuthService::new(users.clone(), jwt.clone()));

    let state = AppState::new(
        config,
        jwt,
        auth.clone(),
        users.clone(),
        documents.clone(),
        groups.clone(),
        storage,
    );

    TestBackend {
        state,
        users,
        documents,
        groups,
        auth,
        _blob_dir: blob_dir,
    }
}

/// A registration payload with unique-enough defaults
pub fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        password: "secret-password".to_string(),
        password_confirm: "secret-password".to_string(),
        email: email.to_string(),
        public_key: "ssh-rsa AAAAB3NzaC1yc2E".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    }
}

/// Assemble a multipart/form-data body with a file part and a text part
pub fn multipart_body(
    boundary: &str,
    file_field: &str,
    filename: &str,
    content_type: &str,
    file_content: &[u8],
    signature: &str,
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{file_field}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(file_content);
    body.extend_from_slice(
        format!(
            "\r\n--{boundary}\r\nContent-Disposition: form-data; name=\"digitalSignature\"\r\n\r\n{signature}\r\n--{boundary}--\r\n"
        )
        .as_bytes(),
    );
    body
}

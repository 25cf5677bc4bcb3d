//! Server bootstrap
//!
//! Loads configuration from the environment and runs the server.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Run the server with configuration loaded from the environment
///
/// Configuration is validated up front; a missing or invalid variable fails
/// the process before anything binds.
pub async fn run_server() -> Result<()> {
    info!("Starting DocVault backend");

    let config = Config::from_env()?;

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}",
        config.server.address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /auth/register - Register account");
    info!("   POST /auth/login - Login");
    info!("   GET  /users - List users");
    info!("   GET  /documents - List documents");
    info!("   POST /documents - Upload PDF");
    info!("   GET  /groups - List groups");

    server.start().await
}

//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods. All
//! services are wired here through explicit constructor injection.

use crate::auth::JwtHandler;
use crate::config::{Config, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::AuthMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::{AuthService, DocumentRegistry, GroupCoordinator, UserDirectory};
use crate::utils::error::{Result, VaultError};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    ///
    /// Connects storage, runs migrations, and wires every service with its
    /// collaborators.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = Arc::new(crate::storage::StorageLayer::new(config).await?);
        storage.migrate().await?;

        let jwt = Arc::new(JwtHandler::new(&config.auth));
        let users = Arc::new(UserDirectory::new(storage.database.clone()));
        let documents = Arc::new(DocumentRegistry::new(
            storage.database.clone(),
            users.clone(),
            storage.files.clone(),
        ));
        let groups = Arc::new(GroupCoordinator::new(
            storage.database.clone(),
            users.clone(),
            documents.clone(),
        ));
        let auth = Arc::new(AuthService::new(users.clone(), jwt.clone()));

        let state = AppState::new(
            config.clone(),
            jwt,
            auth,
            users,
            documents,
            groups,
            storage,
        );

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        info!("Setting up routes and middleware");

        App::new()
            .app_data(state)
            .wrap(AuthMiddleware)
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "DocVault")))
            .route("/health", web::get().to(health_check))
            .configure(routes::auth::configure_routes)
            .configure(routes::users::configure_routes)
            .configure(routes::documents::configure_routes)
            .configure(routes::groups::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| {
                VaultError::internal(format!("Failed to bind to {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| VaultError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

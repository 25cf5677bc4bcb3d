//! Configuration models
//!
//! One struct per concern, each loaded from its environment variables.

pub mod auth;
pub mod database;
pub mod files;
pub mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use files::FilesConfig;
pub use server::ServerConfig;

use crate::utils::error::{Result, VaultError};

/// Read a required environment variable
pub(crate) fn required_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| VaultError::Config(format!("Missing required environment variable {}", name)))
}

/// Read a required environment variable and parse it
pub(crate) fn required_env_parse<T: std::str::FromStr>(name: &str) -> Result<T> {
    required_env(name)?
        .parse()
        .map_err(|_| VaultError::Config(format!("Invalid value for environment variable {}", name)))
}

/// Read an optional environment variable and parse it, falling back to a default
pub(crate) fn optional_env_parse<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| {
            VaultError::Config(format!("Invalid value for environment variable {}", name))
        }),
        Err(_) => Ok(default),
    }
}

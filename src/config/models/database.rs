//! Database configuration

use super::{optional_env_parse, required_env, required_env_parse};
use crate::utils::error::Result;

/// Database connection configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database host
    pub host: String,
    /// Database port
    pub port: u16,
    /// Database name
    pub name: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Maximum pool connections
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub connection_timeout: u64,
}

impl DatabaseConfig {
    /// Load from `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: required_env("DB_HOST")?,
            port: required_env_parse("DB_PORT")?,
            name: required_env("DB_NAME")?,
            user: required_env("DB_USER")?,
            password: required_env("DB_PASSWORD")?,
            max_connections: optional_env_parse("DB_MAX_CONNECTIONS", 10)?,
            connection_timeout: optional_env_parse("DB_CONNECT_TIMEOUT", 10)?,
        })
    }

    /// Assemble the connection URL
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }

    /// Validate database configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Database host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Database port cannot be 0".to_string());
        }

        if self.name.trim().is_empty() {
            return Err("Database name cannot be empty".to_string());
        }

        if self.user.trim().is_empty() {
            return Err("Database user cannot be empty".to_string());
        }

        if self.max_connections == 0 {
            return Err("Max connections cannot be 0".to_string());
        }

        Ok(())
    }
}

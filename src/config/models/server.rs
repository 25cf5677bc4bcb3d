//! Server configuration

use super::{optional_env_parse, required_env};
use crate::utils::error::Result;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Number of worker threads
    pub workers: Option<usize>,
}

impl ServerConfig {
    /// Load from `SERVER_HOST`, `SERVER_PORT` and `SERVER_WORKERS`
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: required_env("SERVER_HOST")?,
            port: optional_env_parse("SERVER_PORT", 3000)?,
            workers: match std::env::var("SERVER_WORKERS") {
                Ok(value) => value.parse().ok(),
                Err(_) => None,
            },
        })
    }

    /// Get the server bind address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the number of workers (defaults to CPU count)
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validate server configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        Ok(())
    }
}

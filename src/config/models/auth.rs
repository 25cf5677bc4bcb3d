//! Authentication configuration

use super::{required_env, required_env_parse};
use crate::utils::error::Result;

/// Session token configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token lifetime in seconds, also used as the cookie Max-Age
    pub jwt_expiration: u64,
}

impl AuthConfig {
    /// Load from `JWT_SECRET` and `EXPIRES_IN`
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            jwt_secret: required_env("JWT_SECRET")?,
            jwt_expiration: required_env_parse("EXPIRES_IN")?,
        })
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long for security".to_string());
        }

        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err(
                "JWT secret must not use default values. Please generate a secure random secret."
                    .to_string(),
            );
        }

        if self.jwt_expiration < 60 {
            return Err("Token expiration should be at least 60 seconds".to_string());
        }

        Ok(())
    }
}

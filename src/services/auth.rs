//! Authentication gateway service

use crate::auth::JwtHandler;
use crate::core::models::{NewUser, User};
use crate::utils::auth::crypto::password::{hash_password, verify_password};
use crate::utils::data::DataValidator;
use crate::utils::error::{Result, VaultError};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use super::users::UserDirectory;

/// Generic login failure message
///
/// Deliberately identical for unknown email and wrong password so the
/// response does not leak which one was wrong.
const LOGIN_FAILED: &str = "Email or password are wrong";

/// Registration request payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub password: String,
    pub password_confirm: String,
    pub email: String,
    pub public_key: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterRequest {
    /// Validate boundary constraints
    pub fn validate(&self) -> Result<()> {
        DataValidator::validate_required(&self.password, "password")?;
        DataValidator::validate_password_confirm(&self.password, &self.password_confirm)?;
        DataValidator::validate_email(&self.email)?;
        DataValidator::validate_required_text(&self.public_key, "publicKey")?;
        DataValidator::validate_required(&self.first_name, "firstName")?;
        DataValidator::validate_required(&self.last_name, "lastName")
    }
}

/// Login request payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Validate boundary constraints
    pub fn validate(&self) -> Result<()> {
        DataValidator::validate_email(&self.email)?;
        DataValidator::validate_required(&self.password, "password")
    }
}

/// A successfully established session: the user plus a signed token
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Orchestrates registration and login over the user directory
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<UserDirectory>,
    jwt: Arc<JwtHandler>,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(users: Arc<UserDirectory>, jwt: Arc<JwtHandler>) -> Self {
        Self { users, jwt }
    }

    /// Register a new account and open a session for it
    pub async fn register(&self, data: &RegisterRequest) -> Result<AuthSession> {
        data.validate()?;

        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(VaultError::bad_request("User already exists"));
        }

        let password = hash_password(&data.password)?;
        let user = self
            .users
            .create(NewUser {
                password,
                email: data.email.clone(),
                public_key: data.public_key.clone(),
                first_name: data.first_name.clone(),
                last_name: data.last_name.clone(),
            })
            .await?;

        let token = self.jwt.issue_token(user.id)?;
        info!("User registered: {}", user.id);

        Ok(AuthSession { user, token })
    }

    /// Authenticate an existing account and open a session for it
    pub async fn login(&self, data: &LoginRequest) -> Result<AuthSession> {
        data.validate()?;

        let Some(user) = self.users.find_by_email(&data.email).await? else {
            warn!("Login attempt with unknown email");
            return Err(VaultError::unauthorized(LOGIN_FAILED));
        };

        if !verify_password(&data.password, &user.password) {
            warn!("Login attempt with wrong password for user {}", user.id);
            return Err(VaultError::unauthorized(LOGIN_FAILED));
        }

        let token = self.jwt.issue_token(user.id)?;
        info!("User logged in: {}", user.id);

        Ok(AuthSession { user, token })
    }

    /// Token lifetime in seconds, used as the session cookie Max-Age
    pub fn session_max_age(&self) -> u64 {
        self.jwt.expiration()
    }
}

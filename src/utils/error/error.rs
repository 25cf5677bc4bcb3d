//! Error types for the backend
//!
//! This module defines all error types used throughout the service.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the backend
pub type Result<T> = std::result::Result<T, VaultError>;

/// Main error type for the backend
#[derive(Error, Debug)]
pub enum VaultError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad request errors
    #[error("{0}")]
    BadRequest(String),

    /// Unauthorized errors
    #[error("{0}")]
    Unauthorized(String),

    /// Not found errors
    #[error("{0}")]
    NotFound(String),

    /// File storage errors
    #[error("File storage error: {0}")]
    FileStorage(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for VaultError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            VaultError::NotFound(_) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                self.to_string(),
            ),
            VaultError::BadRequest(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                self.to_string(),
            ),
            VaultError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            VaultError::Unauthorized(_) => (
                actix_web::http::StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                self.to_string(),
            ),
            VaultError::Jwt(_) => (
                actix_web::http::StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Invalid session token".to_string(),
            ),
            VaultError::Database(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Database operation failed".to_string(),
            ),
            VaultError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Unix timestamp of the failure
    pub timestamp: i64,
}

/// Helper functions for creating specific errors
impl VaultError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Not-found error for an entity referenced by id, `Group #3 not found` style
    pub fn entity_not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{} #{} not found", entity, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = VaultError::unauthorized("Email or password are wrong");
        assert!(matches!(error, VaultError::Unauthorized(_)));

        let error = VaultError::bad_request("User already exists");
        assert!(matches!(error, VaultError::BadRequest(_)));
    }

    #[test]
    fn test_entity_not_found_message() {
        let error = VaultError::entity_not_found("Group", 7);
        assert_eq!(error.to_string(), "Group #7 not found");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            VaultError::not_found("x").error_response().status(),
            actix_web::http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            VaultError::bad_request("x").error_response().status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            VaultError::unauthorized("x").error_response().status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            VaultError::internal("x").error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_message_passthrough() {
        // The login failure body must carry the message verbatim so the
        // unknown-email and wrong-password cases are indistinguishable.
        let error = VaultError::unauthorized("Email or password are wrong");
        assert_eq!(error.to_string(), "Email or password are wrong");
    }
}

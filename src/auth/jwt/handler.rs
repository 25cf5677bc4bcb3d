//! Core JWT handler implementation

use super::types::{Claims, JwtHandler};
use crate::config::AuthConfig;
use crate::utils::error::{Result, VaultError};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

impl JwtHandler {
    /// Create a new JWT handler from the process-wide auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration: config.jwt_expiration,
        }
    }

    /// Issue a session token for a user
    pub fn issue_token(&self, subject_id: i32) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| VaultError::internal(format!("System time error: {}", e)))?
            .as_secs();

        let claims = Claims {
            sub: subject_id,
            iat: now,
            exp: now + self.expiration,
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(VaultError::Jwt)?;

        debug!("Issued session token for user: {}", subject_id);
        Ok(token)
    }

    /// Verify and decode a session token
    ///
    /// Fails on bad signature, malformed token, or elapsed expiry.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(self.algorithm);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            warn!("JWT verification failed: {}", e);
            VaultError::Jwt(e)
        })?;

        debug!("Token verified for user: {}", token_data.claims.sub);
        Ok(token_data.claims)
    }

    /// Token lifetime in seconds
    pub fn expiration(&self) -> u64 {
        self.expiration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> JwtHandler {
        JwtHandler::new(&AuthConfig {
            jwt_secret: "test-secret-that-is-at-least-32-characters-long".to_string(),
            jwt_expiration: 3600,
        })
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let handler = handler();

        let token = handler.issue_token(42).unwrap();
        let claims = handler.verify_token(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let handler = handler();
        let other = JwtHandler::new(&AuthConfig {
            jwt_secret: "another-secret-that-is-at-least-32-chars".to_string(),
            jwt_expiration: 3600,
        });

        let token = other.issue_token(42).unwrap();
        assert!(handler.verify_token(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let handler = handler();
        assert!(handler.verify_token("not-a-jwt").is_err());
        assert!(handler.verify_token("").is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let handler = handler();

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        // Well past the default validation leeway.
        let claims = Claims {
            sub: 7,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(handler.algorithm),
            &claims,
            &handler.encoding_key,
        )
        .unwrap();

        assert!(handler.verify_token(&token).is_err());
    }
}

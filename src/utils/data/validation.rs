//! Boundary validation for request payloads
//!
//! Validation runs explicitly at the HTTP boundary before any domain value
//! is constructed, so services only ever see well-formed input.

use crate::utils::error::{Result, VaultError};
use regex::Regex;

/// Maximum length for varchar(255) backed fields
const MAX_FIELD_LEN: usize = 255;

/// Data validation utilities
pub struct DataValidator;

impl DataValidator {
    /// Validate a required field bounded by the 255-character column limit
    pub fn validate_required(value: &str, field_name: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(VaultError::Validation(format!(
                "{} should not be empty",
                field_name
            )));
        }

        if value.len() > MAX_FIELD_LEN {
            return Err(VaultError::Validation(format!(
                "{} must be shorter than or equal to {} characters",
                field_name, MAX_FIELD_LEN
            )));
        }

        Ok(())
    }

    /// Validate a required free-length string field
    pub fn validate_required_text(value: &str, field_name: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(VaultError::Validation(format!(
                "{} should not be empty",
                field_name
            )));
        }

        Ok(())
    }

    /// Validate email format and length
    pub fn validate_email(email: &str) -> Result<()> {
        Self::validate_required(email, "email")?;

        let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .map_err(|e| VaultError::Internal(format!("Regex error: {}", e)))?;

        if !email_regex.is_match(email) {
            return Err(VaultError::Validation("email must be an email".to_string()));
        }

        Ok(())
    }

    /// Validate that the confirmation field repeats the password exactly
    pub fn validate_password_confirm(password: &str, password_confirm: &str) -> Result<()> {
        Self::validate_required(password_confirm, "passwordConfirm")?;

        if password != password_confirm {
            return Err(VaultError::Validation(
                "passwordConfirm must match password".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate an id list: every element must be a positive integer
    pub fn validate_positive_ids(ids: &[i32], field_name: &str) -> Result<()> {
        if ids.iter().any(|id| *id <= 0) {
            return Err(VaultError::Validation(format!(
                "each value in {} must be a positive number",
                field_name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_empty() {
        assert!(DataValidator::validate_required("", "name").is_err());
        assert!(DataValidator::validate_required("   ", "name").is_err());
        assert!(DataValidator::validate_required("ok", "name").is_ok());
    }

    #[test]
    fn test_required_rejects_over_255() {
        let long = "x".repeat(256);
        assert!(DataValidator::validate_required(&long, "name").is_err());

        let exact = "x".repeat(255);
        assert!(DataValidator::validate_required(&exact, "name").is_ok());
    }

    #[test]
    fn test_email_format() {
        assert!(DataValidator::validate_email("a@x.com").is_ok());
        assert!(DataValidator::validate_email("not-an-email").is_err());
        assert!(DataValidator::validate_email("missing@tld").is_err());
        assert!(DataValidator::validate_email("").is_err());
    }

    #[test]
    fn test_password_confirm_must_match() {
        assert!(DataValidator::validate_password_confirm("secret", "secret").is_ok());
        assert!(DataValidator::validate_password_confirm("secret", "other").is_err());
        assert!(DataValidator::validate_password_confirm("secret", "").is_err());
    }

    #[test]
    fn test_positive_ids() {
        assert!(DataValidator::validate_positive_ids(&[1, 2, 3], "userIds").is_ok());
        assert!(DataValidator::validate_positive_ids(&[], "userIds").is_ok());
        assert!(DataValidator::validate_positive_ids(&[1, 0], "userIds").is_err());
        assert!(DataValidator::validate_positive_ids(&[-4], "userIds").is_err());
    }

    #[test]
    fn test_required_text_allows_long_values() {
        let long = "k".repeat(4000);
        assert!(DataValidator::validate_required_text(&long, "publicKey").is_ok());
        assert!(DataValidator::validate_required_text("", "publicKey").is_err());
    }
}

//! User domain model

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered account holder
///
/// `password` holds the salted digest, never plaintext. The struct is not
/// serializable; use [`UserResponse`] for anything that leaves the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Server-assigned id
    pub id: i32,
    /// Password digest
    pub password: String,
    /// Email address
    pub email: String,
    /// Client-supplied public key, stored opaquely
    pub public_key: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields required to persist a new user
///
/// `password` must already be a digest by the time this is constructed.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Password digest
    pub password: String,
    /// Email address
    pub email: String,
    /// Client-supplied public key
    pub public_key: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
}

/// User output projection: no password, no timestamps
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub public_key: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            public_key: user.public_key,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        user.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            password: "$argon2id$stored-digest".to_string(),
            email: "a@x.com".to_string(),
            public_key: "pk".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_projection_strips_password_and_timestamps() {
        let response = UserResponse::from(sample_user());
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("createdAt"));
        assert!(!object.contains_key("updatedAt"));
        assert_eq!(object["email"], "a@x.com");
        assert_eq!(object["publicKey"], "pk");
        assert_eq!(object["firstName"], "Ada");
    }
}

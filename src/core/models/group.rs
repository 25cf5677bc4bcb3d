//! Group domain model

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::document::{Document, DocumentResponse};
use super::user::{User, UserResponse};

/// A named collection of users and documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Server-assigned id
    pub id: i32,
    /// Group name
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A group together with whichever membership relations were loaded
///
/// `None` means the relation was not fetched, not that it is empty.
#[derive(Debug, Clone)]
pub struct GroupMembers {
    pub group: Group,
    pub users: Option<Vec<User>>,
    pub documents: Option<Vec<Document>>,
}

/// Group output projection: relations appear only when they were loaded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<DocumentResponse>>,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
            users: None,
            documents: None,
        }
    }
}

impl From<GroupMembers> for GroupResponse {
    fn from(members: GroupMembers) -> Self {
        Self {
            id: members.group.id,
            name: members.group.name,
            users: members
                .users
                .map(|users| users.into_iter().map(UserResponse::from).collect()),
            documents: members
                .documents
                .map(|documents| documents.into_iter().map(DocumentResponse::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unloaded_relations_are_omitted() {
        let group = Group {
            id: 1,
            name: "Eng".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(GroupResponse::from(group)).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["name"], "Eng");
        assert!(!object.contains_key("users"));
        assert!(!object.contains_key("documents"));
    }

    #[test]
    fn test_loaded_member_users_never_expose_password() {
        let members = GroupMembers {
            group: Group {
                id: 1,
                name: "Eng".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            users: Some(vec![User {
                id: 9,
                password: "digest".to_string(),
                email: "a@x.com".to_string(),
                public_key: "pk".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }]),
            documents: Some(vec![]),
        };

        let value = serde_json::to_value(GroupResponse::from(members)).unwrap();
        let users = value["users"].as_array().unwrap();

        assert_eq!(users.len(), 1);
        assert!(!users[0].as_object().unwrap().contains_key("password"));
        assert_eq!(value["documents"].as_array().unwrap().len(), 0);
    }
}

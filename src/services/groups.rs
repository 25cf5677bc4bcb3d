//! Group coordination service

use crate::core::models::{Group, GroupMembers};
use crate::storage::database::Database;
use crate::utils::data::DataValidator;
use crate::utils::error::{Result, VaultError};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::documents::DocumentRegistry;
use super::users::UserDirectory;

/// Request payload for creating a group
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    pub user_ids: Vec<i32>,
}

impl CreateGroupRequest {
    /// Validate boundary constraints
    pub fn validate(&self) -> Result<()> {
        DataValidator::validate_required(&self.name, "name")?;
        DataValidator::validate_positive_ids(&self.user_ids, "userIds")
    }
}

/// Request payload for appending users to a group
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUsersRequest {
    pub user_ids: Vec<i32>,
}

impl AddUsersRequest {
    /// Validate boundary constraints
    pub fn validate(&self) -> Result<()> {
        DataValidator::validate_positive_ids(&self.user_ids, "userIds")
    }
}

/// Request payload for appending documents to a group
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDocumentsRequest {
    pub document_ids: Vec<i32>,
}

impl AddDocumentsRequest {
    /// Validate boundary constraints
    pub fn validate(&self) -> Result<()> {
        DataValidator::validate_positive_ids(&self.document_ids, "documentIds")
    }
}

/// Coordinator for groups and their memberships
///
/// Membership only grows: there is no removal operation on the exposed
/// surface. Mutations validate every referenced id through the directory
/// and registry batch lookups before writing anything.
#[derive(Debug, Clone)]
pub struct GroupCoordinator {
    db: Arc<Database>,
    users: Arc<UserDirectory>,
    documents: Arc<DocumentRegistry>,
}

impl GroupCoordinator {
    /// Create a new group coordinator
    pub fn new(
        db: Arc<Database>,
        users: Arc<UserDirectory>,
        documents: Arc<DocumentRegistry>,
    ) -> Self {
        Self {
            db,
            users,
            documents,
        }
    }

    /// List all groups without relations
    pub async fn list(&self) -> Result<Vec<Group>> {
        self.db.list_groups().await
    }

    /// Fetch a group with its users loaded
    pub async fn find_with_users(&self, id: i32) -> Result<GroupMembers> {
        let (group, users) = self
            .db
            .find_group_with_users(id)
            .await?
            .ok_or_else(|| VaultError::entity_not_found("Group", id))?;

        Ok(GroupMembers {
            group,
            users: Some(users),
            documents: None,
        })
    }

    /// Fetch a group with its documents loaded
    pub async fn find_with_documents(&self, id: i32) -> Result<GroupMembers> {
        let (group, documents) = self
            .db
            .find_group_with_documents(id)
            .await?
            .ok_or_else(|| VaultError::entity_not_found("Group", id))?;

        Ok(GroupMembers {
            group,
            users: None,
            documents: Some(documents),
        })
    }

    /// Fetch a group with both relations loaded
    pub async fn find_full(&self, id: i32) -> Result<GroupMembers> {
        let (group, users, documents) = self
            .db
            .find_group_full(id)
            .await?
            .ok_or_else(|| VaultError::entity_not_found("Group", id))?;

        Ok(GroupMembers {
            group,
            users: Some(users),
            documents: Some(documents),
        })
    }

    /// Create a group whose initial user set is the resolved id list
    ///
    /// Every referenced user must exist; the batch lookup fails the whole
    /// request otherwise. The document set starts empty.
    pub async fn create(&self, data: &CreateGroupRequest) -> Result<GroupMembers> {
        let users = self.users.find_by_ids(&data.user_ids).await?;

        let group = self.db.insert_group(&data.name).await?;
        self.db.add_group_users(group.id, &data.user_ids).await?;

        info!("Group {} created with {} users", group.id, users.len());
        Ok(GroupMembers {
            group,
            users: Some(users),
            documents: None,
        })
    }

    /// Append users to a group's membership
    ///
    /// Read-then-append with no transaction; concurrent mutators of the same
    /// group race, which is a documented limitation of this surface.
    pub async fn add_users(&self, group_id: i32, data: &AddUsersRequest) -> Result<GroupMembers> {
        let members = self.find_full(group_id).await?;
        self.users.find_by_ids(&data.user_ids).await?;

        self.db
            .add_group_users(members.group.id, &data.user_ids)
            .await?;

        self.find_full(group_id).await
    }

    /// Append documents to a group's membership
    ///
    /// No ownership check: any existing document may be associated with any
    /// group regardless of who owns it.
    pub async fn add_documents(
        &self,
        group_id: i32,
        data: &AddDocumentsRequest,
    ) -> Result<GroupMembers> {
        let members = self.find_full(group_id).await?;
        self.documents.find_by_ids(&data.document_ids).await?;

        self.db
            .add_group_documents(members.group.id, &data.document_ids)
            .await?;

        self.find_full(group_id).await
    }
}

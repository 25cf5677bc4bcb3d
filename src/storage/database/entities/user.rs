use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::core::models::{NewUser, User};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User id
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Password digest, never plaintext
    pub password: String,

    /// Email address
    pub email: String,

    /// Client-supplied public key
    #[sea_orm(column_type = "Text")]
    pub public_key: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owned documents relation
    #[sea_orm(has_many = "super::document::Entity")]
    Documents,
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_user::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_user::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and the domain model
impl Model {
    /// Convert SeaORM model to the domain user
    pub fn into_domain(self) -> User {
        User {
            id: self.id,
            password: self.password,
            email: self.email,
            public_key: self.public_key,
            first_name: self.first_name,
            last_name: self.last_name,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }

    /// Build an active model for a new user row, timestamps set by the caller
    pub fn from_new_user(user: &NewUser, now: chrono::DateTime<chrono::Utc>) -> ActiveModel {
        ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            password: Set(user.password.clone()),
            email: Set(user.email.clone()),
            public_key: Set(user.public_key.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::core::models::Group;

/// Group database model
///
/// The capitalised table name is inherited from the original schema.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Groups")]
pub struct Model {
    /// Group id
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Group name
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_user::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_user::Relation::Group.def().rev())
    }
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_document::Relation::Document.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_document::Relation::Group.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to the domain group
    pub fn into_domain(self) -> Group {
        Group {
            id: self.id,
            name: self.name,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }

    /// Build an active model for a new group row
    pub fn new_row(name: &str, now: chrono::DateTime<chrono::Utc>) -> ActiveModel {
        ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(name.to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::core::models::Document;

/// Document database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    /// Document id
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Owning user id; nullable in the schema, always set at creation
    pub user_id: Option<i32>,

    /// Server-generated stored filename
    pub filename: String,

    /// Client-supplied original filename
    pub originalname: String,

    /// Client-supplied signature string
    pub digital_signature: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Document entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning user relation
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_document::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_document::Relation::Document.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to the domain document
    pub fn into_domain(self) -> Document {
        Document {
            id: self.id,
            user_id: self.user_id,
            filename: self.filename,
            originalname: self.originalname,
            digital_signature: self.digital_signature,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }

    /// Build an active model for a new document row
    pub fn new_row(
        owner_id: i32,
        filename: &str,
        originalname: &str,
        digital_signature: &str,
        now: chrono::DateTime<chrono::Utc>,
    ) -> ActiveModel {
        ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            user_id: Set(Some(owner_id)),
            filename: Set(filename.to_string()),
            originalname: Set(originalname.to_string()),
            digital_signature: Set(digital_signature.to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

use sea_orm::Set;
use sea_orm::entity::prelude::*;

/// Group membership join row for documents, composite primary key
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "group_documents")]
pub struct Model {
    /// Group id
    #[sea_orm(primary_key, auto_increment = false)]
    pub group_id: i32,

    /// Document id
    #[sea_orm(primary_key, auto_increment = false)]
    pub document_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Group side of the association
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id"
    )]
    Group,

    /// Document side of the association
    #[sea_orm(
        belongs_to = "super::document::Entity",
        from = "Column::DocumentId",
        to = "super::document::Column::Id"
    )]
    Document,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Build an active model for one association row
    pub fn new_row(group_id: i32, document_id: i32) -> ActiveModel {
        ActiveModel {
            group_id: Set(group_id),
            document_id: Set(document_id),
        }
    }
}

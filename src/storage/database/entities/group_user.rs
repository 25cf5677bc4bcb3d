use sea_orm::Set;
use sea_orm::entity::prelude::*;

/// Group membership join row for users, composite primary key
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "group_users")]
pub struct Model {
    /// Group id
    #[sea_orm(primary_key, auto_increment = false)]
    pub group_id: i32,

    /// User id
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
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

    /// User side of the association
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Build an active model for one association row
    pub fn new_row(group_id: i32, user_id: i32) -> ActiveModel {
        ActiveModel {
            group_id: Set(group_id),
            user_id: Set(user_id),
        }
    }
}

//! Database entities

/// Document entity module
pub mod document;
/// Group entity module
pub mod group;
/// Group-document join entity module
pub mod group_document;
/// Group-user join entity module
pub mod group_user;
/// User entity module
pub mod user;

pub use document::Entity as Document;
pub use group::Entity as Group;
pub use group_document::Entity as GroupDocument;
pub use group_user::Entity as GroupUser;
pub use user::Entity as User;

//! Application services
//!
//! Each service receives its collaborators through its constructor; there is
//! no ambient registry. Wiring happens once in `server::HttpServer::new`.

pub mod auth;
pub mod documents;
pub mod groups;
pub mod users;

pub use auth::{AuthService, AuthSession, LoginRequest, RegisterRequest};
pub use documents::DocumentRegistry;
pub use groups::{AddDocumentsRequest, AddUsersRequest, CreateGroupRequest, GroupCoordinator};
pub use users::UserDirectory;

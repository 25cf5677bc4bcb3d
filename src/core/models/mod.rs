//! Domain models and their output projections
//!
//! Domain structs carry the full persisted row, including the password hash
//! and system timestamps, and deliberately do not implement `Serialize`.
//! Everything that leaves the service goes through the `*Response`
//! projections, so sensitive fields can never leak by accident.

pub mod document;
pub mod group;
pub mod user;

pub use document::{Document, DocumentResponse};
pub use group::{Group, GroupMembers, GroupResponse};
pub use user::{NewUser, User, UserResponse};

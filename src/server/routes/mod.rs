//! HTTP route modules
//!
//! One module per resource, each exposing a `configure_routes` function the
//! server composes. Success payloads are the output projections from
//! `core::models`; failures surface through `VaultError`'s `ResponseError`.

pub mod auth;
pub mod documents;
pub mod groups;
pub mod users;

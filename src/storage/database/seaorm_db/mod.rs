//! SeaORM database implementation
//!
//! Connection management plus repository operations split per aggregate.

mod connection;
mod document_ops;
mod group_ops;
mod types;
mod user_ops;

pub use types::{DatabaseBackendType, SeaOrmDatabase};

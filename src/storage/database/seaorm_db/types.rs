use sea_orm::DatabaseConnection;

/// Database backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    /// PostgreSQL backend
    PostgreSQL,
    /// SQLite backend
    SQLite,
}

/// SeaORM-backed repository over the relational store
#[derive(Debug, Clone)]
pub struct SeaOrmDatabase {
    /// Active connection pool
    pub(super) db: DatabaseConnection,
    /// Which backend the pool talks to
    pub(super) backend_type: DatabaseBackendType,
}

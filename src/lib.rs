//! # DocVault
//!
//! Document management backend: users register and log in, upload PDF
//! documents tied to their account, and organize users and documents into
//! groups with many-to-many membership.
//!
//! The interesting part is the access-and-association layer: how users,
//! documents, and groups relate, how membership mutations are validated
//! through all-or-nothing batch lookups, and how authentication establishes
//! identity for those operations.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docvault::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> docvault::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = server::HttpServer::new(&config).await?;
//!     server.start().await
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{Result, VaultError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, "docvault");
    }
}

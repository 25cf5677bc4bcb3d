//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

// Submodules
pub mod middleware;
pub mod routes;

// Modular server components
pub mod builder;
mod handlers;
pub mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;

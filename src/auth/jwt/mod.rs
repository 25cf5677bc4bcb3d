//! JWT session tokens
//!
//! Stateless session credentials: a signed `{ sub }` payload with a
//! process-wide expiry, carried in the `Authentication` cookie.

mod handler;
mod types;

pub use types::{Claims, JwtHandler};

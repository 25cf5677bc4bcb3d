//! Session token handling

pub mod jwt;

pub use jwt::{Claims, JwtHandler};

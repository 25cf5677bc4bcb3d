//! Error handling for the backend

mod error;

pub use error::{ErrorDetail, ErrorResponse, Result, VaultError};

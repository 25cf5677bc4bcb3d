//! Helper functions for middleware

use crate::utils::error::VaultError;
use actix_web::{HttpMessage, HttpRequest};

/// Name of the session cookie
pub const AUTH_COOKIE: &str = "Authentication";

/// The authenticated caller, injected into request extensions by the auth
/// middleware once the session token verifies
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    /// The caller's user id, from the token's `sub` claim
    pub id: i32,
}

/// Extract the authenticated caller from a request
///
/// Only works behind the auth middleware; on public routes there is nothing
/// to extract.
pub fn current_user(req: &HttpRequest) -> Result<CurrentUser, VaultError> {
    req.extensions()
        .get::<CurrentUser>()
        .copied()
        .ok_or_else(|| VaultError::internal("Missing authenticated user context"))
}

/// Check if a route is public (doesn't require authentication)
pub fn is_public_route(path: &str) -> bool {
    const PUBLIC_ROUTES: &[&str] = &["/health", "/auth/register", "/auth/login", "/users"];

    PUBLIC_ROUTES.iter().any(|&route| path.starts_with(route))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert!(is_public_route("/health"));
        assert!(is_public_route("/auth/login"));
        assert!(is_public_route("/auth/register"));
        assert!(is_public_route("/users"));
    }

    #[test]
    fn test_protected_routes() {
        assert!(!is_public_route("/documents"));
        assert!(!is_public_route("/documents/my_documents"));
        assert!(!is_public_route("/documents/download/a.pdf"));
        assert!(!is_public_route("/groups"));
        assert!(!is_public_route("/groups/users/1"));
    }
}

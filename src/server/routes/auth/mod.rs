//! Authentication endpoints

mod login;
mod register;

pub use login::login;
pub use register::register;

use crate::server::middleware::helpers::AUTH_COOKIE;
use actix_web::cookie::{Cookie, time::Duration};
use actix_web::web;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login)),
    );
}

/// Build the HTTP-only session cookie carrying the signed token
pub(crate) fn session_cookie(token: String, max_age_seconds: u64) -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE, token)
        .http_only(true)
        .path("/")
        .max_age(Duration::seconds(max_age_seconds as i64))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("token-value".to_string(), 3600);

        assert_eq!(cookie.name(), "Authentication");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }
}

//! User registration endpoint

use crate::core::models::UserResponse;
use crate::server::state::AppState;
use crate::services::RegisterRequest;
use crate::utils::error::VaultError;
use actix_web::{HttpResponse, web};
use tracing::info;

use super::session_cookie;

/// User registration endpoint
///
/// Creates the account, opens a session, and sets the session cookie in one
/// round trip. Responds 201 with the user projection.
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, VaultError> {
    info!("User registration attempt: {}", request.email);

    let session = state.auth.register(&request).await?;
    let cookie = session_cookie(session.token, state.auth.session_max_age());

    Ok(HttpResponse::Created()
        .cookie(cookie)
        .json(UserResponse::from(session.user)))
}

//! User login endpoint

use crate::core::models::UserResponse;
use crate::server::state::AppState;
use crate::services::LoginRequest;
use crate::utils::error::VaultError;
use actix_web::{HttpResponse, web};
use tracing::info;

use super::session_cookie;

/// User login endpoint
///
/// Responds 200 with the user projection and the session cookie; any
/// credential failure is a 401 with a non-distinguishing message.
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, VaultError> {
    info!("User login attempt: {}", request.email);

    let session = state.auth.login(&request).await?;
    let cookie = session_cookie(session.token, state.auth.session_max_age());

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(UserResponse::from(session.user)))
}

//! User endpoints

use crate::core::models::UserResponse;
use crate::server::state::AppState;
use crate::utils::error::VaultError;
use actix_web::{HttpResponse, web};

/// Configure user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").route("", web::get().to(list)));
}

/// Unfiltered user listing, passwords stripped by the projection
pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, VaultError> {
    let users = state.users.list().await?;

    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

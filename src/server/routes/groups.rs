//! Group endpoints

use crate::core::models::GroupResponse;
use crate::server::state::AppState;
use crate::services::{AddDocumentsRequest, AddUsersRequest, CreateGroupRequest};
use crate::utils::error::VaultError;
use actix_web::{HttpResponse, web};
use tracing::info;

/// Configure group routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/groups")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/users/{id}", web::get().to(find_with_users))
            .route("/users/{id}", web::put().to(add_users))
            .route("/documents/{id}", web::get().to(find_with_documents))
            .route("/documents/{id}", web::put().to(add_documents)),
    );
}

/// Lightweight group listing, relations not populated
pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, VaultError> {
    let groups = state.groups.list().await?;

    let response: Vec<GroupResponse> = groups.into_iter().map(GroupResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// Fetch one group with its user members
pub async fn find_with_users(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, VaultError> {
    let members = state.groups.find_with_users(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(GroupResponse::from(members)))
}

/// Fetch one group with its document members
pub async fn find_with_documents(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, VaultError> {
    let members = state.groups.find_with_documents(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(GroupResponse::from(members)))
}

/// Create a group from a name and an initial user id list
pub async fn create(
    state: web::Data<AppState>,
    request: web::Json<CreateGroupRequest>,
) -> Result<HttpResponse, VaultError> {
    request.validate()?;
    info!("Creating group: {}", request.name);

    let members = state.groups.create(&request).await?;
    Ok(HttpResponse::Created().json(GroupResponse::from(members)))
}

/// Append users to a group's membership
pub async fn add_users(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    request: web::Json<AddUsersRequest>,
) -> Result<HttpResponse, VaultError> {
    request.validate()?;

    let members = state
        .groups
        .add_users(path.into_inner(), &request)
        .await?;
    Ok(HttpResponse::Ok().json(GroupResponse::from(members)))
}

/// Append documents to a group's membership
pub async fn add_documents(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    request: web::Json<AddDocumentsRequest>,
) -> Result<HttpResponse, VaultError> {
    request.validate()?;

    let members = state
        .groups
        .add_documents(path.into_inner(), &request)
        .await?;
    Ok(HttpResponse::Ok().json(GroupResponse::from(members)))
}

//! Authentication middleware
//!
//! Verifies the `Authentication` cookie's session token on every protected
//! route and injects the authenticated caller into request extensions.
//! Token validation is stateless; each request is evaluated independently.

use crate::server::AppState;
use crate::server::middleware::helpers::{AUTH_COOKIE, CurrentUser, is_public_route};
use crate::utils::error::VaultError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{HttpMessage, ResponseError, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, warn};

/// Auth middleware for Actix-web
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path().to_string();

        if is_public_route(&path) {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) });
        }

        let token = req.cookie(AUTH_COOKIE).map(|c| c.value().to_string());
        let app_state = req.app_data::<web::Data<AppState>>().cloned();

        let claims = match (app_state, token) {
            (Some(state), Some(token)) => match state.jwt.verify_token(&token) {
                Ok(claims) => Some(claims),
                Err(e) => {
                    warn!("Session token rejected: {}", e);
                    None
                }
            },
            (_, None) => {
                debug!("No session cookie on protected route: {}", path);
                None
            }
            (None, _) => None,
        };

        match claims {
            Some(claims) => {
                req.extensions_mut().insert(CurrentUser { id: claims.sub });
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
            }
            None => {
                let (request, _payload) = req.into_parts();
                let response = VaultError::unauthorized("Invalid or missing session token")
                    .error_response()
                    .map_into_right_body();
                Box::pin(async move { Ok(ServiceResponse::new(request, response)) })
            }
        }
    }
}

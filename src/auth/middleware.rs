//! Token-verifying middleware for protected routes.
//!
//! Wrapped around the `/tasks` scope so registration and login never pass
//! through it. Each request either becomes authenticated (the resolved user
//! id is attached to request extensions) or is rejected: a missing or
//! malformed `Authorization` header yields 401, a token that fails
//! verification yields 403.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::extractors::AuthenticatedUserId;
use crate::auth::token::verify_token;
use crate::error::AppError;

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S> AuthMiddlewareService<S> {
    /// Turns the request into a rejection response without invoking the
    /// wrapped service.
    fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
        req.into_response(err.error_response()).map_into_right_body()
    }
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let bearer_token = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);

        match bearer_token {
            Some(token) => match verify_token(&token) {
                Ok(claims) => {
                    req.extensions_mut()
                        .insert(AuthenticatedUserId(claims.user_id));
                    let fut = self.service.call(req);
                    Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
                }
                Err(app_err) => {
                    let res = Self::reject(req, app_err);
                    Box::pin(async move { Ok(res) })
                }
            },
            None => {
                let res = Self::reject(req, AppError::Unauthorized("Access denied".into()));
                Box::pin(async move { Ok(res) })
            }
        }
    }
}

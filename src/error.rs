//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. Each variant maps to a distinct HTTP status code so that
//! failure kinds stay distinguishable at the boundary (missing token vs.
//! invalid token, unknown login email vs. bad password, persistence failure).
//!
//! `AppError` implements `actix_web::error::ResponseError`, so handlers can
//! return `Result<_, AppError>` and rely on `?` with the provided `From`
//! implementations for `sqlx::Error` and `bcrypt::BcryptError`.
//!
//! Storage and hashing failures carry their internal detail only for the log:
//! the client receives a redacted generic message while the detail is emitted
//! via `log::error!`.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Request lacked a bearer token entirely (HTTP 401).
    Unauthorized(String),
    /// A bearer token was presented but failed verification (HTTP 403).
    Forbidden(String),
    /// Client-side error, e.g. a password mismatch at login (HTTP 400).
    BadRequest(String),
    /// A requested record was not found, e.g. an unknown login email (HTTP 404).
    NotFound(String),
    /// Unexpected server-side failure such as a hashing or signing error (HTTP 500).
    /// The carried message is internal detail and is logged, not returned.
    InternalServerError(String),
    /// Any persistence failure, including constraint violations (HTTP 500).
    /// The carried message is internal detail and is logged, not returned.
    DatabaseError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::Forbidden(msg) => HttpResponse::Forbidden().json(json!({
                "error": msg
            })),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            // Internal detail is logged and never echoed back to the client.
            AppError::InternalServerError(msg) => {
                log::error!("internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
            AppError::DatabaseError(msg) => {
                log::error!("database error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        AppError::DatabaseError(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}

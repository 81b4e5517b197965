//! Typed errors and HTTP mapping.

use crate::response::MessageBody;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Client-facing message for a missing user.
pub const NOT_FOUND_MESSAGE: &str = "User not found";
/// Client-facing message for a body that cannot be parsed.
pub const BAD_REQUEST_MESSAGE: &str = "Cannot parse body";
/// Client-facing message for a body over the size limit.
pub const TOO_LARGE_MESSAGE: &str = "Request body too large";
/// Client-facing message for store failures outside the lookup step.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Startup configuration errors. All of these are fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error loading .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid DB_PORT: {0}")]
    InvalidPort(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Request-level errors returned by handlers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge;
        }
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::NotFound => NOT_FOUND_MESSAGE,
            AppError::BadRequest(_) => BAD_REQUEST_MESSAGE,
            AppError::PayloadTooLarge => TOO_LARGE_MESSAGE,
            AppError::Store(_) => INTERNAL_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::BadRequest(detail) => tracing::debug!(detail = %detail, "rejected body"),
            AppError::Store(e) => tracing::error!(error = %e, "store error"),
            AppError::NotFound => tracing::debug!("user not found"),
            AppError::PayloadTooLarge => tracing::debug!("body over size limit"),
        }
        let body = MessageBody::new(self.message());
        (self.status(), Json(body)).into_response()
    }
}

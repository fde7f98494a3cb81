//! API error handling
//!
//! One taxonomy for the whole service. Credential failures collapse into a
//! single `InvalidCredentials` variant so "unknown user" and "wrong
//! password" cannot drift into distinguishable responses; internal faults
//! are logged server-side and rendered as a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Human-readable message
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Malformed input or field mismatch (400)
    Validation(String),
    /// Unknown user or wrong password, indistinguishable by design (400)
    InvalidCredentials,
    /// Missing, malformed, expired, or badly-signed token (401)
    Unauthorized,
    /// Verified token with the wrong role (403)
    Forbidden,
    /// Duplicate registration (400, generic message)
    Conflict,
    /// Unexpected fault (500, logged, generic message)
    Internal(String),
    /// Store unavailable or query failure (500, logged, generic message)
    Database(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ApiError::new(msg)),
            AppError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, ApiError::new("Invalid credentials"))
            }
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiError::new("Authentication required"),
            ),
            AppError::Forbidden => (StatusCode::FORBIDDEN, ApiError::new("Access denied")),
            AppError::Conflict => (
                StatusCode::BAD_REQUEST,
                ApiError::new("Registration failed"),
            ),
            AppError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("Server error"),
                )
            }
            AppError::Database(msg) => {
                tracing::error!("database error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("Server error"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<crate::auth::StoreError> for AppError {
    fn from(err: crate::auth::StoreError) -> Self {
        use crate::auth::StoreError;

        match err {
            StoreError::DuplicateKey => AppError::Conflict,
            StoreError::Database(msg) => AppError::Database(msg),
        }
    }
}

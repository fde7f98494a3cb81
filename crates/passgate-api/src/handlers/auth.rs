//! Authentication API handlers
//!
//! HTTP endpoints for user registration and login.

use crate::auth::models::CreatedUser;
use crate::auth::{LoginRequest, RegisterRequest};
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Registration response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user: CreatedUser,
}

/// Login response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Register a new user account
///
/// Creates a new user with the provided email, username, and password.
/// New users are assigned the 'user' role.
///
/// # Responses
///
/// * `201 Created` - User successfully registered (no password field)
/// * `400 Bad Request` - Invalid input or email/username already taken
/// * `500 Internal Server Error` - Server error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Invalid input or duplicate", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
    )
)]
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.auth_service().register(request).await?;

    let response = RegisterResponse {
        message: "User registered successfully".to_string(),
        user,
    };

    Ok((axum::http::StatusCode::CREATED, Json(response)))
}

/// Login with username and password
///
/// Authenticates a user and returns a signed access token valid for one
/// hour. Unknown usernames and wrong passwords produce an identical
/// response.
///
/// # Responses
///
/// * `200 OK` - Authentication successful, returns token
/// * `400 Bad Request` - Invalid credentials
/// * `500 Internal Server Error` - Server error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid credentials", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.auth_service().login(request).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

//! Protected route handlers
//!
//! Both routes sit behind the auth middleware; the admin route is
//! additionally gated by `require_role(UserRole::Admin)`.

use crate::auth::AuthenticatedUser;
use axum::{response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting response for protected routes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GreetingResponse {
    pub message: String,
}

/// Get the authenticated user's profile greeting
///
/// # Responses
///
/// * `200 OK` - Greeting containing the username
/// * `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/protected/profile",
    tag = "protected",
    responses(
        (status = 200, description = "Profile greeting", body = GreetingResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ApiError),
    ),
    security(("bearer_auth" = []))
)]
pub async fn profile_handler(
    Extension(user): Extension<AuthenticatedUser>,
) -> impl IntoResponse {
    Json(GreetingResponse {
        message: format!("Welcome to your profile, {}", user.username),
    })
}

/// Admin-only greeting
///
/// # Responses
///
/// * `200 OK` - Greeting containing the username
/// * `401 Unauthorized` - Missing or invalid token
/// * `403 Forbidden` - Token does not carry the admin role
#[utoipa::path(
    get,
    path = "/api/protected/admin",
    tag = "protected",
    responses(
        (status = 200, description = "Admin greeting", body = GreetingResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ApiError),
        (status = 403, description = "Insufficient role", body = crate::error::ApiError),
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_handler(Extension(user): Extension<AuthenticatedUser>) -> impl IntoResponse {
    Json(GreetingResponse {
        message: format!("Welcome to your profile, {}", user.username),
    })
}

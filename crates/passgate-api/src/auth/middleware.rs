/// Authentication middleware for protecting routes
///
/// Extracts and validates JWT bearer tokens from the Authorization header.
/// On success, adds authenticated user information to request extensions
/// for downstream handlers and the role gate.
use super::jwt::{validate_access_token, Claims, JwtError};
use super::models::UserRole;
use super::policy::{self, Decision};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Authenticated user information extracted from a verified token
///
/// Added to request extensions by `auth_middleware`; handlers extract it
/// with `Extension<AuthenticatedUser>`. Claims are trusted as issued,
/// including `is_active` — there is no store re-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// User's unique identifier
    pub user_id: Uuid,
    /// User's login name
    pub username: String,
    /// User's role (admin, user)
    pub role: UserRole,
    /// Whether the account was active at token issuance
    pub is_active: bool,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id().unwrap_or_else(Uuid::nil),
            username: claims.username,
            role: claims.role,
            is_active: claims.is_active,
        }
    }
}

/// Authentication middleware errors
///
/// The first three variants all render the same generic 401 body; which
/// one occurred is only visible in server-side diagnostics.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No token presented")]
    MissingToken,

    #[error("Invalid Authorization header format")]
    InvalidAuthHeader,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] JwtError),

    #[error("Insufficient role")]
    InsufficientRole,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken
            | AuthError::InvalidAuthHeader
            | AuthError::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            AuthError::InsufficientRole => (StatusCode::FORBIDDEN, "Access denied"),
        };

        let body = serde_json::json!({ "message": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Authentication middleware that requires a valid bearer token
///
/// This middleware:
/// 1. Extracts the Authorization header
/// 2. Validates the Bearer token format
/// 3. Validates the JWT signature and expiration against the injected config
/// 4. Adds `AuthenticatedUser` to request extensions
///
/// The signing config comes from `AppState` via `from_fn_with_state`; the
/// middleware never reads the environment.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthHeader)?;

    let claims = match validate_access_token(&state.jwt, token) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("token rejected: {e}");
            return Err(AuthError::InvalidToken(e));
        }
    };

    request.extensions_mut().insert(AuthenticatedUser::from(claims));

    Ok(next.run(request).await)
}

/// Type alias for role middleware future
type RoleMiddlewareFuture =
    std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AuthError>> + Send>>;

/// Middleware factory for role-based access control
///
/// Returns a middleware that applies the access policy to the claims left
/// in extensions by `auth_middleware`. The check is an exact role match;
/// there is no hierarchy, so `require_role(UserRole::User)` rejects admin
/// tokens too.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, middleware};
/// use passgate_api::auth::middleware::{auth_middleware, require_role};
/// use passgate_api::auth::models::UserRole;
///
/// let app = Router::new()
///     .route("/admin", get(admin_handler))
///     .route_layer(middleware::from_fn(require_role(UserRole::Admin)))
///     .route_layer(middleware::from_fn_with_state(state, auth_middleware));
/// ```
pub fn require_role(
    required: UserRole,
) -> impl Fn(Request<Body>, Next) -> RoleMiddlewareFuture + Clone {
    move |request: Request<Body>, next: Next| {
        Box::pin(async move {
            let user = request
                .extensions()
                .get::<AuthenticatedUser>()
                .ok_or(AuthError::MissingToken)?
                .clone();

            match policy::authorize(user.role, Some(required)) {
                Decision::Allow => Ok(next.run(request).await),
                Decision::Deny { reason } => {
                    tracing::debug!(username = %user.username, "access denied: {reason}");
                    Err(AuthError::InsufficientRole)
                }
            }
        })
    }
}

//! API route definitions

use crate::auth::middleware::{auth_middleware, require_role};
use crate::auth::models::UserRole;
use crate::handlers::{auth, protected};
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create `/api` routes
///
/// Auth endpoints are public; everything under `/protected` requires a
/// valid bearer token, and `/protected/admin` additionally an exact
/// `admin` role match.
pub fn api_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    // Public routes (no authentication required)
    let auth_routes = Router::new()
        .route("/register", post(auth::register_handler))
        .route("/login", post(auth::login_handler));

    // Protected routes (authentication required)
    let protected_routes = Router::new()
        .route("/profile", get(protected::profile_handler))
        .route(
            "/admin",
            get(protected::admin_handler)
                .route_layer(middleware::from_fn(require_role(UserRole::Admin))),
        )
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .nest("/auth", auth_routes)
        .nest("/protected", protected_routes)
}

//! Passgate API - authentication and authorization server
//!
//! Issues signed identity tokens after verifying credentials and gates
//! access to protected operations by validating those tokens and checking
//! the embedded role claim.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the application router over shared state
pub fn create_router(state: Arc<state::AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api", routes::api_routes(state.clone()))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create a router backed by the in-memory store, for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub fn create_router_for_testing() -> Router {
    create_router_with_store(Arc::new(auth::MemoryUserStore::new()))
}

/// Create a test router over a caller-owned in-memory store
///
/// Keeping a handle to the store lets tests seed accounts (admins,
/// deactivated users) that registration cannot produce.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_router_with_store(store: Arc<auth::MemoryUserStore>) -> Router {
    use passgate_core::config::{AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig};

    let config = AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig::default(),
        auth: AuthConfig {
            jwt_secret: "test-signing-secret".to_string(),
            token_ttl_secs: 3600,
        },
        logging: LoggingConfig::default(),
    };

    let state = Arc::new(state::AppState::new(config, store));
    create_router(state)
}

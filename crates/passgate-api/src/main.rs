//! Passgate API Server
//!
//! REST API server for authentication and authorization.

use passgate_api::auth::PgUserStore;
use passgate_api::{create_router, state::AppState};
use passgate_core::config::AppConfig;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "passgate_api=debug,tower_http=debug".into()),
        )
        .init();

    // Load configuration; a missing signing secret aborts startup here
    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Connect to the credential store
    let pool = PgPoolOptions::new()
        .max_connections(config.database.pool_size)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    let store = Arc::new(PgUserStore::new(pool));

    // Create application state and router
    let state = Arc::new(AppState::new(config, store));
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Passgate API server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

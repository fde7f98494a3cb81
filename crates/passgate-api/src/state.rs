//! Application state management

use crate::auth::jwt::JwtConfig;
use crate::auth::service::AuthService;
use crate::auth::store::UserStore;
use passgate_core::config::AppConfig;
use std::sync::Arc;

/// Application state shared across handlers
///
/// Read-only after startup: the signing configuration is loaded once and
/// never mutated, and the store handle is the only route to shared data.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// JWT signing configuration, derived from `config.auth`
    pub jwt: JwtConfig,
    /// Credential store adapter
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    /// Create new application state with config and a store adapter
    pub fn new(config: AppConfig, store: Arc<dyn UserStore>) -> Self {
        let jwt = JwtConfig::new(config.auth.jwt_secret.clone(), config.auth.token_ttl_secs);
        Self { config, jwt, store }
    }

    /// Build an auth service over this state's store and signing config
    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.store.clone(), self.jwt.clone())
    }
}

//! Authentication service layer
//!
//! Business logic for registration and login, independent of the HTTP
//! layer and of the storage backend behind the `UserStore` trait.

use super::jwt::{issue_access_token, JwtConfig};
use super::password::{hash_password, verify_password};
use super::store::UserStore;
use crate::auth::models::CreatedUser;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// User registration request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// User login request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Authentication service
///
/// Holds the injected store handle and signing configuration; shared
/// read-only across requests.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    jwt: JwtConfig,
}

/// Username constraint: 6-30 characters, alphanumeric or underscore
fn is_valid_username(username: &str) -> bool {
    (6..=30).contains(&username.len())
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, jwt: JwtConfig) -> Self {
        Self { store, jwt }
    }

    /// Register a new user
    ///
    /// Validates field presence, the username pattern, and the password
    /// confirmation before hashing; the raw password is dropped after the
    /// hash is computed. The returned record never includes the hash.
    pub async fn register(&self, request: RegisterRequest) -> Result<CreatedUser, AppError> {
        if request.email.is_empty()
            || request.username.is_empty()
            || request.password.is_empty()
            || request.confirm_password.is_empty()
        {
            return Err(AppError::Validation("All fields are required".to_string()));
        }

        if !is_valid_username(&request.username) {
            return Err(AppError::Validation("Invalid username format".to_string()));
        }

        if request.password != request.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        // bcrypt at cost 12 is deliberately slow; keep it off the event loop
        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(format!("hashing task failed: {e}")))?
            .map_err(|e| AppError::Internal(format!("failed to hash password: {e}")))?;

        let created = self
            .store
            .insert_user(&request.email, &request.username, &password_hash)
            .await?;

        tracing::info!(username = %created.username, "user registered");
        Ok(created)
    }

    /// Login with username and password, returning a signed access token
    ///
    /// An unknown username and a wrong password both yield
    /// `AppError::InvalidCredentials`; nothing about the response reveals
    /// which check failed.
    pub async fn login(&self, request: LoginRequest) -> Result<String, AppError> {
        let user = self
            .store
            .find_by_username(&request.username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password = request.password;
        let hash = user.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("verification task failed: {e}")))?;

        if !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = issue_access_token(&self.jwt, user.id, &user.username, user.role, user.is_active)
            .map_err(|e| AppError::Internal(format!("failed to issue token: {e}")))?;

        tracing::info!(username = %user.username, "login successful");
        Ok(token)
    }
}

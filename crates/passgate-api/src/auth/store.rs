//! Credential store adapter
//!
//! The core stays ignorant of the underlying storage technology: it only
//! consumes the `UserStore` trait, which exposes a fetch-by-username and a
//! single-statement insert. Two adapters are provided:
//! - `PgUserStore`: PostgreSQL via sqlx, the production store
//! - `MemoryUserStore`: in-process map for tests and local development

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

use super::models::{CreatedUser, User};

/// Store errors
///
/// `DuplicateKey` covers unique-constraint violations on either email or
/// username; callers surface it as a generic conflict without saying which
/// field collided.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate email or username")]
    DuplicateKey,

    #[error("Database error: {0}")]
    Database(String),
}

/// Minimal query contract the auth core needs from user storage
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user record by username, `None` if absent
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new user, returning the public subset of the record
    ///
    /// Fails with `StoreError::DuplicateKey` if the email or username is
    /// already taken. The write is a single statement; there is no partial
    /// record to roll back.
    async fn insert_user(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<CreatedUser, StoreError>;
}

/// PostgreSQL-backed user store
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return StoreError::DuplicateKey;
        }
    }
    StoreError::Database(e.to_string())
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, username, password_hash, role, is_active, created_at \
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn insert_user(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<CreatedUser, StoreError> {
        sqlx::query_as::<_, CreatedUser>(
            "INSERT INTO users (id, email, username, password_hash, role, is_active, created_at) \
             VALUES ($1, $2, $3, $4, 'user', true, NOW()) \
             RETURNING id, email, username",
        )
        .bind(uuid::Uuid::new_v4())
        .bind(email)
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}

/// In-memory user store for tests and local development
///
/// Enforces the same email/username uniqueness as the database schema.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed record, bypassing registration
    ///
    /// Lets tests seed admin or deactivated accounts directly.
    pub async fn seed(&self, user: User) {
        self.users.write().await.insert(user.username.clone(), user);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn insert_user(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<CreatedUser, StoreError> {
        let mut users = self.users.write().await;

        let taken = users
            .values()
            .any(|u| u.username == username || u.email == email);
        if taken {
            return Err(StoreError::DuplicateKey);
        }

        let user = User::new(
            email.to_string(),
            username.to_string(),
            password_hash.to_string(),
        );
        let created = user.to_created();
        users.insert(username.to_string(), user);

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_insert_and_find() {
        let store = MemoryUserStore::new();

        let created = store
            .insert_user("a@b.com", "user_01", "hash")
            .await
            .expect("insert failed");
        assert_eq!(created.username, "user_01");

        let found = store.find_by_username("user_01").await.unwrap();
        assert!(found.is_some());
        let user = found.unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_memory_store_missing_user_is_none() {
        let store = MemoryUserStore::new();
        assert!(store.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_duplicate_username() {
        let store = MemoryUserStore::new();
        store.insert_user("a@b.com", "user_01", "h1").await.unwrap();

        let result = store.insert_user("other@b.com", "user_01", "h2").await;
        assert!(matches!(result, Err(StoreError::DuplicateKey)));
    }

    #[tokio::test]
    async fn test_memory_store_duplicate_email() {
        let store = MemoryUserStore::new();
        store.insert_user("a@b.com", "user_01", "h1").await.unwrap();

        let result = store.insert_user("a@b.com", "user_02", "h2").await;
        assert!(matches!(result, Err(StoreError::DuplicateKey)));
    }
}

//! Data models for authentication and authorization
//!
//! This module defines the core data structures for the auth system:
//! - User: the account record as stored by the credential store
//! - UserRole: role enum embedded into tokens and checked by the policy
//! - CreatedUser: the public subset returned after registration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User role enum
///
/// Defines the access level for a user in the system:
/// - Admin: administrative endpoints
/// - User: regular authenticated access (default at registration)
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    /// Convert role to string representation
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    /// Parse role from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "user" => Some(UserRole::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User account record
///
/// Owned by the credential store; the core only ever reads it. The password
/// hash is never serialized into API responses.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user identifier (store-assigned)
    pub id: Uuid,

    /// User's email address (unique)
    pub email: String,

    /// User's login name (unique, 6-30 chars, alphanumeric + underscore)
    pub username: String,

    /// Hashed password (bcrypt, cost 12)
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// User's role
    pub role: UserRole,

    /// Whether the account is active
    pub is_active: bool,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with default role and active status
    pub fn new(email: String, username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash,
            role: UserRole::default(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Public subset of this record, safe for API responses
    pub fn to_created(&self) -> CreatedUser {
        CreatedUser {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
        }
    }
}

/// Public user representation returned after registration
///
/// Excludes the password hash and every other sensitive field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct CreatedUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
}

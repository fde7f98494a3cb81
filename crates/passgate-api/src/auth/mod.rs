//! Authentication and authorization module
//!
//! This module provides the credential and token lifecycle core:
//! - Password hashing and verification (bcrypt, cost 12)
//! - Token issuance and validation (HS256 JWT, 1-hour lifetime)
//! - Pure role-based access decisions
//! - Middleware gating protected routes
//! - The credential store trait and its adapters

pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod policy;
pub mod service;
pub mod store;

pub use jwt::{issue_access_token, validate_access_token, Claims, JwtConfig, JwtError};
pub use middleware::{auth_middleware, require_role, AuthError, AuthenticatedUser};
pub use models::{CreatedUser, User, UserRole};
pub use password::{hash_password, verify_password, PasswordError};
pub use policy::{authorize, Decision};
pub use service::{AuthService, LoginRequest, RegisterRequest};
pub use store::{MemoryUserStore, PgUserStore, StoreError, UserStore};

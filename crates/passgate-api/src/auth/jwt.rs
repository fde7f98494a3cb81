//! JWT token issuance and validation
//!
//! Implements stateless bearer tokens with HMAC-SHA256 signing. A token
//! carries the user's identity and role claims frozen at issuance time;
//! validity is determined purely by signature and expiry, with no store
//! lookups. A deactivated or demoted user therefore keeps their issued
//! claims until expiry (bounded by the one-hour lifetime).

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

use super::models::UserRole;

/// JWT claims structure containing user information
///
/// These claims are embedded in the access token and extracted during
/// validation. They reflect the user record exactly as it was at issuance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user ID
    pub sub: String,
    /// User's login name
    pub username: String,
    /// User's role (admin, user)
    pub role: UserRole,
    /// Whether the account was active at issuance
    pub is_active: bool,
    /// Issued at timestamp (Unix epoch)
    pub iat: u64,
    /// Expiration timestamp (Unix epoch)
    pub exp: u64,
}

impl Claims {
    /// Parse the subject back into a user ID
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Token issuance and validation errors
///
/// All variants collapse to the same generic rejection at the API boundary;
/// they stay distinct here for diagnostics.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to encode JWT: {0}")]
    Encoding(jsonwebtoken::errors::Error),

    #[error("Malformed token")]
    Malformed,

    #[error("Token has expired")]
    Expired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),
}

/// JWT configuration
///
/// The secret is process-wide configuration, loaded once at startup and
/// injected here; it is never read from the environment at request time
/// and never logged.
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for HMAC signing
    pub secret: String,
    /// Access token lifetime in seconds (default: 3600 = 1 hour)
    pub ttl_secs: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }
}

// Manual Debug so the signing secret cannot leak through debug logging.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

/// Issue a signed access token for an authenticated user
///
/// Embeds `{sub, username, role, is_active}` plus issued-at and expires-at
/// (`now + ttl`). Any mutation of the payload invalidates the signature.
pub fn issue_access_token(
    config: &JwtConfig,
    user_id: Uuid,
    username: &str,
    role: UserRole,
    is_active: bool,
) -> Result<String, JwtError> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        role,
        is_active,
        iat: now,
        exp: now + config.ttl_secs,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(JwtError::Encoding)
}

/// Validate an access token and extract its claims
///
/// Checks the HS256 signature, then the expiry. Trusts the embedded claims
/// as issued; performs no store lookups.
pub fn validate_access_token(config: &JwtConfig, token: &str) -> Result<Claims, JwtError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // No clock leeway: a token is rejected the second it passes `exp`
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => JwtError::InvalidSignature,
        _ => JwtError::Malformed,
    })?;

    Ok(token_data.claims)
}

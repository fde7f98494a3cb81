/// Password hashing and verification using bcrypt
///
/// Implements salted, adaptive-cost password hashing:
/// - Algorithm: bcrypt
/// - Cost factor: 12 (work doubles per increment)
/// - Salt: 16 bytes random, embedded in the hash string
///
/// Verification fails closed: a malformed or truncated stored hash is
/// reported as a non-match, never as a fault that could bypass the check.
use thiserror::Error;

/// bcrypt cost factor
///
/// Fixed at 12 as a deliberate trade-off against brute force; raising it
/// slows every login by roughly 2x per increment.
pub const BCRYPT_COST: u32 = 12;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),

    #[error("Password must not be empty")]
    EmptyPassword,
}

/// Hash a plaintext password with bcrypt at cost 12
///
/// # Returns
///
/// * `Ok(String)` - Modular crypt format hash (includes cost and salt)
/// * `Err(PasswordError)` - If the input is empty or hashing fails
///
/// # Security Notes
///
/// - The returned hash is safe to store in the database
/// - The hash embeds its salt, so no separate storage is needed
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::EmptyPassword);
    }

    bcrypt::hash(password, BCRYPT_COST).map_err(|e| PasswordError::HashingFailed(e.to_string()))
}

/// Verify a plaintext password against a stored hash
///
/// Comparison is delegated to bcrypt's own constant-time-safe routine.
/// Returns `false` for a mismatch and for any internal verification error
/// (invalid hash format, unsupported version); errors never propagate out
/// of the credential check.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(matched) => matched,
        Err(e) => {
            tracing::warn!("password verification error treated as mismatch: {e}");
            false
        }
    }
}

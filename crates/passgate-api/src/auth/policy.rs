//! Role-based access policy
//!
//! A pure decision function over verified claims: no store lookups, no
//! clock reads, no hidden state. Token validity (signature, expiry) has
//! already been resolved by the verifier before this runs.

use super::models::UserRole;

/// Outcome of an access policy evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { reason: String },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide whether a verified token holder may proceed
///
/// `required` of `None` is an authentication-only gate: any verified token
/// authorizes. `Some(role)` allows iff the claim matches exactly; there is
/// no role hierarchy, so an admin token does not satisfy a `user`
/// requirement (or vice versa).
pub fn authorize(role: UserRole, required: Option<UserRole>) -> Decision {
    match required {
        None => Decision::Allow,
        Some(required) if role == required => Decision::Allow,
        Some(required) => Decision::Deny {
            reason: format!("requires role '{required}', token carries '{role}'"),
        },
    }
}

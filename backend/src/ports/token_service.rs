//! Token service port.
//!
//! Issues and validates stateless bearer tokens. Validation is pure
//! computation over a process-resident key, so the trait is synchronous and
//! safe to call from middleware without suspending.
//!
//! Validation returns the identity rather than writing it anywhere; the auth
//! gate decides where to put it.

use crate::domain::foundation::{AuthError, UserId};

pub trait TokenService: Send + Sync {
    /// Issues a signed token for `user_id` that expires after the configured
    /// lifetime.
    ///
    /// # Errors
    ///
    /// - `SigningFailed` if the key cannot be used for signing
    fn issue(&self, user_id: UserId) -> Result<String, AuthError>;

    /// Verifies `token` and returns its subject.
    ///
    /// # Errors
    ///
    /// - `InvalidSignature` for a foreign key or signing algorithm
    /// - `MalformedClaims` for missing or ill-typed claims
    /// - `WrongIssuer` if `iss` is not ours
    /// - `Expired` once the current time is past `exp`
    fn validate(&self, token: &str) -> Result<UserId, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn token_service_is_object_safe() {
        fn _accepts_dyn(_service: &dyn TokenService) {}
    }
}

//! Authentication types for the domain layer.
//!
//! These types represent an authenticated caller and the ways token
//! validation can fail. They have **no external dependencies**; the JWT
//! adapter populates them via the `TokenService` port.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after token validation:
//! let user = AuthenticatedUser::new(user_id);
//!
//! // Inject into request extensions for handlers to use
//! request.extensions_mut().insert(user);
//! ```

use super::UserId;
use thiserror::Error;

/// Caller identity resolved by the auth gate for a single request.
///
/// Handlers must take the owning user of anything they create from here,
/// never from the request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The identity carried in the token's `sub` claim.
    pub id: UserId,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// Authentication errors that can occur while issuing or validating tokens.
///
/// These errors are **domain-centric** - they describe what went wrong
/// from the application's perspective, not the JWT library's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header, or it does not use the `Bearer` scheme.
    #[error("Missing bearer credentials")]
    MissingCredentials,

    /// Signature or signing algorithm does not match the configured key.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Expected claims are absent or have the wrong type.
    #[error("Malformed token claims")]
    MalformedClaims,

    /// The `iss` claim is not ours.
    #[error("Token issued by an unknown issuer")]
    WrongIssuer,

    /// The current time is past the `exp` claim.
    #[error("Token expired")]
    Expired,

    /// Username or password did not match at login.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The token could not be signed (key unavailable or unusable).
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

impl AuthError {
    /// Creates a signing failure with a message.
    pub fn signing_failed(message: impl Into<String>) -> Self {
        Self::SigningFailed(message.into())
    }

    /// Returns true if this error indicates the caller should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        !matches!(self, AuthError::SigningFailed(_))
    }
}

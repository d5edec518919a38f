//! Credential hasher port.
//!
//! One-way password hashing. Salt handling, cost factor, and constant-time
//! comparison are the implementation's responsibility.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hashes `plaintext` into a self-describing digest.
    async fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Returns `Ok(true)` if `plaintext` matches `digest`.
    ///
    /// # Errors
    ///
    /// - `InternalError` if `digest` is not a digest this hasher understands
    async fn verify(&self, digest: &str, plaintext: &str) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn credential_hasher_is_object_safe() {
        fn _accepts_dyn(_hasher: &dyn CredentialHasher) {}
    }
}

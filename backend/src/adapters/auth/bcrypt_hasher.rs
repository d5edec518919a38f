//! bcrypt implementation of the `CredentialHasher` port.
//!
//! Hashing is CPU-bound, so both operations run on the blocking pool.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CredentialHasher;

#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// `cost` must be within bcrypt's 4..=31; config validation enforces it.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl CredentialHasher for BcryptHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        let plaintext = plaintext.to_string();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Password hashing task failed: {}", e),
                )
            })?
            .map_err(|e| {
                DomainError::new(ErrorCode::InternalError, format!("Password hashing error: {}", e))
            })
    }

    async fn verify(&self, digest: &str, plaintext: &str) -> Result<bool, DomainError> {
        let plaintext = plaintext.to_string();
        let digest = digest.to_string();
        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &digest))
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Password verification task failed: {}", e),
                )
            })?
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Password verification error: {}", e),
                )
            })
    }
}

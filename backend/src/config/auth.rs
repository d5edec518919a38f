//! Authentication configuration

use rand::RngCore;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HS256 secret length in bytes.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// Longest accepted token lifetime (one year).
pub const MAX_TOKEN_LIFETIME_HOURS: i64 = 24 * 365;

/// Authentication configuration (HS256 tokens, bcrypt passwords)
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// Token signing secret. Outside production a random one is generated
    /// when unset, so restarts invalidate all tokens.
    pub jwt_secret: Option<SecretString>,

    /// Token lifetime in hours
    #[serde(default = "default_token_lifetime_hours")]
    pub token_lifetime_hours: i64,

    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// The configured signing secret, if any.
    pub fn signing_secret(&self) -> Option<&[u8]> {
        self.jwt_secret
            .as_ref()
            .map(|secret| secret.expose_secret().as_bytes())
    }

    /// A fresh random secret of `MIN_JWT_SECRET_BYTES` bytes.
    pub fn generate_signing_secret() -> Vec<u8> {
        let mut secret = vec![0u8; MIN_JWT_SECRET_BYTES];
        rand::thread_rng().fill_bytes(&mut secret);
        secret
    }

    pub fn token_lifetime(&self) -> chrono::Duration {
        chrono::Duration::hours(self.token_lifetime_hours)
    }

    /// Validate authentication configuration
    ///
    /// Production requires an explicit secret.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        match self.signing_secret() {
            Some(secret) if secret.len() < MIN_JWT_SECRET_BYTES => {
                return Err(ValidationError::JwtSecretTooShort(MIN_JWT_SECRET_BYTES));
            }
            None if *environment == Environment::Production => {
                return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
            }
            _ => {}
        }
        if !(1..=MAX_TOKEN_LIFETIME_HOURS).contains(&self.token_lifetime_hours) {
            return Err(ValidationError::InvalidTokenLifetime);
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ValidationError::InvalidBcryptCost);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_lifetime_hours: default_token_lifetime_hours(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_token_lifetime_hours() -> i64 {
    24
}

fn default_bcrypt_cost() -> u32 {
    12
}

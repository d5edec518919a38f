//! Authentication adapters.
//!
//! - `jwt` - HS256 `TokenService`
//! - `bcrypt_hasher` - `CredentialHasher` backed by bcrypt
//! - `clock` - System and manually driven `Clock`s

mod bcrypt_hasher;
mod clock;
mod jwt;

pub use bcrypt_hasher::BcryptHasher;
pub use clock::{ManualClock, SystemClock};
pub use jwt::{JwtTokenService, DEFAULT_TOKEN_LIFETIME_HOURS, ISSUER};

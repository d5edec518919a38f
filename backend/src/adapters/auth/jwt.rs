//! HS256 JWT implementation of the `TokenService` port.
//!
//! Tokens carry exactly three claims: `sub` (numeric user id), `iss` (always
//! [`ISSUER`]) and `exp` (Unix seconds). There is no revocation; rotating the
//! signing secret invalidates every outstanding token.
//!
//! Expiry is checked against the injected [`Clock`] rather than by the jwt
//! library, so tests can move time.

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, UserId};
use crate::ports::{Clock, TokenService};

/// Value of the `iss` claim on every token we issue.
pub const ISSUER: &str = "workout-tracker";

/// Default token lifetime.
pub const DEFAULT_TOKEN_LIFETIME_HOURS: i64 = 24;

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject - the user ID
    sub: i64,

    /// Issuer
    iss: String,

    /// Expiry timestamp (Unix epoch seconds)
    exp: i64,
}

/// Issues and validates tokens with a single symmetric secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    has_key: bool,
    lifetime: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenService {
    pub fn new(secret: &[u8], lifetime: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            has_key: !secret.is_empty(),
            lifetime,
            clock,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(ALGORITHM);

        // exp and iss are checked by hand below so they map onto distinct errors
        // and read time from the injected clock.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        validation
    }

    /// Rejects any header whose `alg` is not ours, including ones the jwt
    /// library has no variant for (`none`).
    fn check_algorithm(token: &str) -> Result<(), AuthError> {
        match decode_header(token) {
            Ok(header) if header.alg == ALGORITHM => Ok(()),
            Ok(header) => {
                tracing::debug!("Token signed with unexpected algorithm {:?}", header.alg);
                Err(AuthError::InvalidSignature)
            }
            Err(e) => match e.kind() {
                // Header JSON rejected, e.g. an `alg` with no Algorithm variant
                ErrorKind::Json(_) => {
                    tracing::debug!("Token header rejected: {}", e);
                    Err(AuthError::InvalidSignature)
                }
                _ => {
                    tracing::debug!("Token header could not be decoded: {}", e);
                    Err(AuthError::MalformedClaims)
                }
            },
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: UserId) -> Result<String, AuthError> {
        if !self.has_key {
            return Err(AuthError::signing_failed("signing secret is empty"));
        }

        let claims = Claims {
            sub: user_id.as_i64(),
            iss: ISSUER.to_string(),
            exp: self.clock.now().plus(self.lifetime).as_unix_secs(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            AuthError::signing_failed(e.to_string())
        })
    }

    fn validate(&self, token: &str) -> Result<UserId, AuthError> {
        Self::check_algorithm(token)?;

        let token_data = decode::<Claims>(token, &self.decoding_key, &Self::validation())
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    tracing::debug!("Token signature rejected: {}", e);
                    AuthError::InvalidSignature
                }
                _ => {
                    tracing::debug!("Token could not be decoded: {}", e);
                    AuthError::MalformedClaims
                }
            })?;
        let claims = token_data.claims;

        if claims.iss != ISSUER {
            tracing::warn!("Token issuer mismatch: got '{}'", claims.iss);
            return Err(AuthError::WrongIssuer);
        }

        if self.clock.now().as_unix_secs() > claims.exp {
            tracing::debug!("Token expired for user {}", claims.sub);
            return Err(AuthError::Expired);
        }

        Ok(UserId::new(claims.sub))
    }
}

impl std::fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("algorithm", &ALGORITHM)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::ManualClock;
    use crate::domain::foundation::Timestamp;
    use serde_json::json;

    const SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes-long";

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(
            Timestamp::from_unix_secs(1_700_000_000).unwrap(),
        ))
    }

    fn service(clock: Arc<ManualClock>) -> JwtTokenService {
        JwtTokenService::new(SECRET, Duration::hours(DEFAULT_TOKEN_LIFETIME_HOURS), clock)
    }

    fn sign(claims: serde_json::Value, algorithm: Algorithm, secret: &[u8]) -> String {
        encode(&Header::new(algorithm), &claims, &EncodingKey::from_secret(secret)).unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Issue / Validate Round Trip
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn validate_returns_identity_of_issued_token() {
        let service = service(clock());

        let token = service.issue(UserId::new(42)).unwrap();

        assert_eq!(service.validate(&token).unwrap(), UserId::new(42));
    }

    #[test]
    fn issued_token_carries_expected_claims() {
        let clock = clock();
        let service = service(clock.clone());

        let token = service.issue(UserId::new(7)).unwrap();
        let data = decode::<Claims>(&token, &DecodingKey::from_secret(SECRET), &JwtTokenService::validation())
            .unwrap();

        assert_eq!(data.header.alg, Algorithm::HS256);
        assert_eq!(data.claims.sub, 7);
        assert_eq!(data.claims.iss, ISSUER);
        assert_eq!(data.claims.exp, clock.now().as_unix_secs() + 24 * 3600);
    }

    #[test]
    fn issue_fails_without_a_key() {
        let service = JwtTokenService::new(b"", Duration::hours(24), clock());
        assert!(matches!(
            service.issue(UserId::new(1)),
            Err(AuthError::SigningFailed(_))
        ));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Expiry
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn token_is_valid_until_lifetime_elapses() {
        let clock = clock();
        let service = service(clock.clone());
        let token = service.issue(UserId::new(42)).unwrap();

        clock.advance(Duration::hours(24));
        assert_eq!(service.validate(&token).unwrap(), UserId::new(42));

        clock.advance(Duration::seconds(1));
        assert_eq!(service.validate(&token), Err(AuthError::Expired));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rejections
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenService::new(
            b"another-secret-that-is-also-32-bytes-long",
            Duration::hours(24),
            clock(),
        );
        let token = other.issue(UserId::new(42)).unwrap();

        assert_eq!(service(clock()).validate(&token), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn token_signed_with_other_algorithm_is_rejected() {
        let token = sign(
            json!({ "sub": 42, "iss": ISSUER, "exp": 4_000_000_000i64 }),
            Algorithm::HS512,
            SECRET,
        );

        assert_eq!(service(clock()).validate(&token), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn unsigned_token_is_rejected_as_invalid_signature() {
        // {"alg":"none","typ":"JWT"} . {"sub":42,"iss":"workout-tracker","exp":4000000000} . <empty>
        let token = concat!(
            "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0",
            ".",
            "eyJzdWIiOjQyLCJpc3MiOiJ3b3Jrb3V0LXRyYWNrZXIiLCJleHAiOjQwMDAwMDAwMDB9",
            "."
        );

        assert_eq!(service(clock()).validate(token), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let service = service(clock());
        let token = service.issue(UserId::new(42)).unwrap();
        let forged = sign(
            json!({ "sub": 1, "iss": ISSUER, "exp": 4_000_000_000i64 }),
            Algorithm::HS256,
            SECRET,
        );

        // Header and signature from the real token, payload from another one.
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = forged.split('.').nth(1).unwrap();
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert_eq!(service.validate(&tampered), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let token = sign(
            json!({ "sub": 42, "iss": "someone-else", "exp": 4_000_000_000i64 }),
            Algorithm::HS256,
            SECRET,
        );

        assert_eq!(service(clock()).validate(&token), Err(AuthError::WrongIssuer));
    }

    #[test]
    fn missing_claims_are_malformed() {
        let token = sign(json!({ "sub": 42, "iss": ISSUER }), Algorithm::HS256, SECRET);

        assert_eq!(service(clock()).validate(&token), Err(AuthError::MalformedClaims));
    }

    #[test]
    fn ill_typed_subject_is_malformed() {
        let token = sign(
            json!({ "sub": "forty-two", "iss": ISSUER, "exp": 4_000_000_000i64 }),
            Algorithm::HS256,
            SECRET,
        );

        assert_eq!(service(clock()).validate(&token), Err(AuthError::MalformedClaims));
    }

    #[test]
    fn garbage_token_is_malformed() {
        assert_eq!(
            service(clock()).validate("not-a-jwt"),
            Err(AuthError::MalformedClaims)
        );
    }
}

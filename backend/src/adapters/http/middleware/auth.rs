//! Auth gate middleware and extractor for axum.
//!
//! This module provides:
//! - `require_auth` - Layer that rejects requests without a valid Bearer token
//!   and injects the caller into request extensions
//! - `RequireAuth` - Extractor that reads the caller back out in handlers
//!
//! # Architecture
//!
//! The middleware depends only on the `TokenService` port.
//!
//! ```text
//! Request → require_auth ─ invalid ─→ 401 (handler never runs)
//!                │
//!              valid → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::post, middleware};
//! use std::sync::Arc;
//!
//! let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(secret, lifetime, clock));
//!
//! let app = Router::new()
//!     .route("/api/v1/workoutsession/create", post(create_handler))
//!     .layer(middleware::from_fn_with_state(tokens, require_auth));
//!
//! async fn create_handler(RequireAuth(user): RequireAuth) -> String {
//!     format!("Hello, {}!", user.id)
//! }
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::TokenService;

/// Auth middleware state - wraps the token service.
pub type AuthState = Arc<dyn TokenService>;

const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the token from `Authorization: Bearer <token>`.
///
/// The scheme marker is matched literally; surrounding whitespace of the
/// token itself is ignored.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::MissingCredentials)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MissingCredentials)?
        .trim();
    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(token)
}

/// Authentication middleware that validates Bearer tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token using the `TokenService` port
/// 3. On success, injects `AuthenticatedUser` into request extensions and
///    runs the wrapped handler
/// 4. On any failure, returns 401 Unauthorized without running the handler
pub async fn require_auth(
    State(tokens): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let result = bearer_token(request.headers()).and_then(|token| tokens.validate(token));

    match result {
        Ok(user_id) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser::new(user_id));
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!("Rejected request: {}", e);
            AuthRejection::from(e).into_response()
        }
    }
}

/// Extractor that requires authentication.
///
/// Reads the `AuthenticatedUser` that `require_auth` injected. Returns 401 if
/// the route was mounted without the middleware.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .copied()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    /// No user was injected for this request.
    Unauthenticated,
    /// The presented credentials were rejected.
    Invalid(AuthError),
}

impl From<AuthError> for AuthRejection {
    fn from(err: AuthError) -> Self {
        AuthRejection::Invalid(err)
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let message = match &self {
            AuthRejection::Unauthenticated => "Authentication required".to_string(),
            AuthRejection::Invalid(e) => e.to_string(),
        };

        ErrorResponse::unauthorized(message).with_status(StatusCode::UNAUTHORIZED)
    }
}

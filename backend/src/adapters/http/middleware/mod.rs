//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `auth` - Auth gate middleware and extractor

pub mod auth;

pub use auth::{require_auth, AuthRejection, AuthState, RequireAuth};

//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` composes them with the auth gate and cross-cutting layers.

pub mod error;
pub mod exercise;
pub mod middleware;
pub mod router;
pub mod user;
pub mod workout_session;

pub use error::ErrorResponse;
pub use router::{api_router, app_router, AppServices, HttpSettings};

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT tokens, bcrypt hashing, clocks
//! - `postgres` - sqlx-backed persistence
//! - `memory` - In-memory persistence for tests and local runs
//! - `http` - axum REST API
//! - `transactional_store` - All-or-nothing session writes over any `AggregateDatabase`

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod transactional_store;

pub use transactional_store::TransactionalWorkoutSessionStore;

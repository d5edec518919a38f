//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth)
//! - `user` - Account registration and persisted users
//! - `exercise` - User-owned exercise catalog
//! - `workout_session` - Session aggregate, flat records, and the assembler

pub mod exercise;
pub mod foundation;
pub mod user;
pub mod workout_session;

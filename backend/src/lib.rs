//! Workout Tracker - backend for recording workout sessions.
//!
//! Users record a session with its workouts and sets in one request; the
//! whole aggregate is written in a single transaction or not at all.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! HTTP adapter for user registration and login.

mod dto;
mod handlers;
mod routes;

pub use dto::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
pub use handlers::UserHandlers;
pub use routes::user_routes;

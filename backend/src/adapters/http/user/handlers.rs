//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{json_rejection, status_for, ErrorResponse};
use crate::application::handlers::account::{
    LoginCommand, LoginHandler, RegisterUserCommand, RegisterUserHandler,
};
use crate::domain::user::UserError;

use super::dto::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct UserHandlers {
    register_handler: Arc<RegisterUserHandler>,
    login_handler: Arc<LoginHandler>,
}

impl UserHandlers {
    pub fn new(register_handler: Arc<RegisterUserHandler>, login_handler: Arc<LoginHandler>) -> Self {
        Self {
            register_handler,
            login_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/user/register - Create an account
pub async fn register(
    State(handlers): State<UserHandlers>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = RegisterUserCommand {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(user) => (StatusCode::CREATED, Json(UserResponse::from(user))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// POST /api/v1/user/login - Exchange credentials for a token
pub async fn login(
    State(handlers): State<UserHandlers>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = LoginCommand {
        username: req.username,
        password: req.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(token) => (StatusCode::OK, Json(TokenResponse { token })).into_response(),
        Err(e) => handle_user_error(e),
    }
}

fn handle_user_error(error: UserError) -> Response {
    let code = error.code();
    let body = match error {
        UserError::ValidationFailed { field, message } => ErrorResponse::validation(&field, message),
        UserError::UsernameTaken(username) => {
            ErrorResponse::new(code, format!("Username '{}' is already taken", username))
        }
        UserError::InvalidCredentials => ErrorResponse::new(code, "Invalid username or password"),
        UserError::Token(e) => {
            tracing::error!("Token issue failed: {}", e);
            ErrorResponse::new(code, "Failed to issue token")
        }
        UserError::Infrastructure(msg) => {
            tracing::error!("User request failed: {}", msg);
            ErrorResponse::new(code, "Internal error")
        }
    };
    body.with_status(status_for(code))
}

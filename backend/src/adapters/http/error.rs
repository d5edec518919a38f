//! Shared JSON error body for HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// Error response body. `code` is always an [`ErrorCode`] rendered as text.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            details: Some(serde_json::json!({ "field": field })),
            ..Self::new(ErrorCode::ValidationFailed, message)
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Pairs this body with `status`.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// HTTP status for each error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::BadRequest | ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an undecodable JSON body to 400.
pub fn json_rejection(rejection: JsonRejection) -> Response {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    ErrorResponse::bad_request(rejection.body_text()).with_status(StatusCode::BAD_REQUEST)
}

/// Maps undecodable query parameters to 400.
pub fn query_rejection(rejection: QueryRejection) -> Response {
    ErrorResponse::bad_request(rejection.body_text()).with_status(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn validation_error_names_field() {
        let error = ErrorResponse::validation("reps", "must be >= 0");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["details"]["field"], "reps");
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::internal("boom")).unwrap();
        assert!(json.get("details").is_none());
    }

    #[test]
    fn with_status_sets_status() {
        let response = ErrorResponse::new(ErrorCode::Conflict, "taken").with_status(StatusCode::CONFLICT);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn constructors_render_their_error_code() {
        let cases = [
            (ErrorResponse::bad_request("x"), ErrorCode::BadRequest),
            (ErrorResponse::validation("reps", "x"), ErrorCode::ValidationFailed),
            (ErrorResponse::unauthorized("x"), ErrorCode::Unauthorized),
            (ErrorResponse::internal("x"), ErrorCode::InternalError),
        ];
        for (body, code) in cases {
            assert_eq!(body.code, code.to_string());
        }
    }

    #[test]
    fn client_errors_are_4xx_and_infrastructure_errors_are_5xx() {
        for code in [
            ErrorCode::BadRequest,
            ErrorCode::ValidationFailed,
            ErrorCode::Conflict,
            ErrorCode::Unauthorized,
        ] {
            assert!(status_for(code).is_client_error(), "{code}");
        }
        for code in [ErrorCode::DatabaseError, ErrorCode::InternalError] {
            assert!(status_for(code).is_server_error(), "{code}");
        }
    }
}

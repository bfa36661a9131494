use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::identity::errors::AuthError;

pub mod check_auth;
pub mod login;
pub mod me;
pub mod register;

/// Stable machine-readable error codes of the wire contract.
///
/// ERR-1xxx are reserved for system-wide failures, ERR-2xxx for
/// application-specific ones.
pub mod error_codes {
    pub const BAD_REQUEST: &str = "ERR-1001";
    pub const INTERNAL_SERVER_ERROR: &str = "ERR-1002";
    pub const RESOURCE_NOT_FOUND: &str = "ERR-1003";
    pub const UNAUTHORIZED_ACCESS: &str = "ERR-1004";

    pub const USER_EMAIL_ALREADY_IN_USE: &str = "ERR-2001";
    pub const USER_NOT_FOUND: &str = "ERR-2002";
    pub const USER_INVALID_PASSWORD: &str = "ERR-2003";
}

/// Token payload returned by successful register and login calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponseData {
    pub token: String,
}

/// Boundary error with a fixed wire mapping.
///
/// Each kind resolves to a status, an error code, and a human message; the
/// catch-all `InternalServerError` deliberately carries nothing, so no
/// internal detail can leak to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized,
    EmailAlreadyInUse,
    UserNotFound,
    InvalidPassword,
    InternalServerError,
}

impl ApiError {
    fn parts(self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST, message)
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                error_codes::UNAUTHORIZED_ACCESS,
                "Unauthorized access attempt".to_string(),
            ),
            ApiError::EmailAlreadyInUse => (
                StatusCode::BAD_REQUEST,
                error_codes::USER_EMAIL_ALREADY_IN_USE,
                "Email already in use. Please use a different email.".to_string(),
            ),
            ApiError::UserNotFound => (
                StatusCode::NOT_FOUND,
                error_codes::USER_NOT_FOUND,
                "User not found".to_string(),
            ),
            ApiError::InvalidPassword => (
                StatusCode::BAD_REQUEST,
                error_codes::USER_INVALID_PASSWORD,
                "Invalid password provided.".to_string(),
            ),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_SERVER_ERROR,
                "Internal server error: Something went wrong".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = self.parts();

        let body = ErrorResponse {
            status: status.as_u16(),
            error_code: error_code.to_string(),
            message,
            timestamp: Utc::now(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::EmailAlreadyInUse(_) => ApiError::EmailAlreadyInUse,
            AuthError::UserNotFound(_) => ApiError::UserNotFound,
            AuthError::InvalidPassword => ApiError::InvalidPassword,
            AuthError::Internal(cause) => {
                // Cause stays in the logs only
                tracing::error!(error = ?cause, "Internal failure at the boundary");
                ApiError::InternalServerError
            }
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "errorCode")]
    pub error_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_mapping() {
        assert_eq!(
            ApiError::from(AuthError::EmailAlreadyInUse("a@x.com".to_string())),
            ApiError::EmailAlreadyInUse
        );
        assert_eq!(
            ApiError::from(AuthError::UserNotFound("a@x.com".to_string())),
            ApiError::UserNotFound
        );
        assert_eq!(
            ApiError::from(AuthError::InvalidPassword),
            ApiError::InvalidPassword
        );
        assert_eq!(
            ApiError::from(AuthError::Internal(anyhow::anyhow!("pool exhausted"))),
            ApiError::InternalServerError
        );
    }

    #[test]
    fn test_internal_error_leaks_nothing() {
        let err = ApiError::from(AuthError::Internal(anyhow::anyhow!("pg: pool exhausted")));
        let (status, code, message) = err.parts();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, error_codes::INTERNAL_SERVER_ERROR);
        assert!(!message.contains("pool exhausted"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::EmailAlreadyInUse.parts().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::UserNotFound.parts().0, StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidPassword.parts().0, StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unauthorized.parts().0, StatusCode::UNAUTHORIZED);
    }
}

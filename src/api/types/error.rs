//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// Status name, e.g. `NOT_FOUND`
    pub http_status: String,
    pub error_message: String,
    pub local_date_time: NaiveDateTime,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                http_status: status_name(status),
                error_message: message.into(),
                local_date_time: Local::now().naive_local(),
            },
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// Upper snake case name of a status code, e.g. `NOT_FOUND`
fn status_name(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect(),
        None => status.as_str().to_string(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Conflict { message } => Self::conflict(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Storage { .. } | DomainError::Internal { .. } => {
                error!(error = %err, "Unexpected error while handling request");
                Self::internal(err.message())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.http_status, self.response.error_message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Budget can't be negative.");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.http_status, "BAD_REQUEST");
        assert_eq!(err.response.error_message, "Budget can't be negative.");
    }

    #[test]
    fn test_status_names() {
        assert_eq!(status_name(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_name(StatusCode::CONFLICT), "CONFLICT");
        assert_eq!(
            status_name(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL_SERVER_ERROR"
        );
        assert_eq!(
            status_name(StatusCode::UNSUPPORTED_MEDIA_TYPE),
            "UNSUPPORTED_MEDIA_TYPE"
        );
    }

    #[test]
    fn test_domain_error_conversion() {
        let cases = [
            (DomainError::not_found("missing"), StatusCode::NOT_FOUND),
            (DomainError::conflict("taken"), StatusCode::CONFLICT),
            (DomainError::validation("invalid"), StatusCode::BAD_REQUEST),
            (
                DomainError::storage("connection refused"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (domain_err, expected) in cases {
            let message = domain_err.message().to_string();
            let api_err: ApiError = domain_err.into();

            assert_eq!(api_err.status, expected);
            assert_eq!(api_err.response.error_message, message);
        }
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::not_found("User 'user1' couldn't be found in database.");
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json["httpStatus"], "NOT_FOUND");
        assert_eq!(
            json["errorMessage"],
            "User 'user1' couldn't be found in database."
        );
        assert!(json["localDateTime"].is_string());
    }
}

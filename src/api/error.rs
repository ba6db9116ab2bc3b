//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response body
///
/// Every failure comes back in this one shape; callers get a single message
/// field regardless of the error's origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    pub error_message: String,
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
                error_message: message.into(),
            },
        }
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.error_message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_status() {
        let err = ApiError::internal("Can not find user");

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.response.error_message, "Can not find user");
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::internal("Invalid parameter");
        let json = serde_json::to_string(&err.response).unwrap();

        assert_eq!(json, r#"{"errorMessage":"Invalid parameter"}"#);
    }

    #[test]
    fn test_error_response_deserialization() {
        let response: ApiErrorResponse =
            serde_json::from_str(r#"{"errorMessage":"Can not delete user"}"#).unwrap();

        assert_eq!(response.error_message, "Can not delete user");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::internal("User name is empty");

        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("User name is empty"));
    }
}

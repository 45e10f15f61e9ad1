//! API error type rendered as a JSON body.

use crate::inspect::{HealthState, InspectError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Failure body: `{"error": "..."}`, plus `"status": "error"` on the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    code: StatusCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HealthState>,
    pub error: String,
}

impl ApiError {
    /// Create an internal server error (500).
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            status: None,
            error: message.into(),
        }
    }

    /// Create a health endpoint failure (500) carrying `status: "error"`.
    pub fn health_failure(message: impl Into<String>) -> Self {
        Self {
            status: Some(HealthState::Error),
            ..Self::internal(message)
        }
    }

    /// Create a not found error (404).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::NOT_FOUND,
            status: None,
            error: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.code
    }
}

impl From<InspectError> for ApiError {
    fn from(e: InspectError) -> Self {
        Self::internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_body() {
        let error = ApiError::internal("disk on fire");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json, serde_json::json!({"error": "disk on fire"}));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_health_failure_body() {
        let error = ApiError::health_failure("bad manifest");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "bad manifest");
    }

    #[test]
    fn test_from_inspect_error() {
        let error: ApiError = InspectError::Task("cancelled".to_string()).into();
        assert_eq!(error.error, "inspection task failed: cancelled");
    }

    #[test]
    fn test_into_response_status() {
        assert_eq!(
            ApiError::not_found("x").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::health_failure("x").into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

//! Error types for the HTTP layer

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::callbacks::CallbackError;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Invalid parameter in request
    InvalidParameter(String),
    /// No callback registered for the requested output
    UnknownOutput(String),
    /// Internal server error
    InternalError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ApiError::UnknownOutput(output) => write!(f, "Unknown output: {}", output),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::InvalidParameter(msg) => (
                StatusCode::BAD_REQUEST,
                "InvalidParameter",
                msg.clone(),
            ),
            ApiError::UnknownOutput(output) => (
                StatusCode::NOT_FOUND,
                "UnknownOutput",
                format!("No callback registered for '{}'", output),
            ),
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                msg.clone(),
            ),
        };

        let body = Json(json!({
            "error": error_type,
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<CallbackError> for ApiError {
    fn from(err: CallbackError) -> Self {
        match err {
            CallbackError::UnknownOutput(output) => ApiError::UnknownOutput(output),
            CallbackError::InputMismatch { .. } | CallbackError::InvalidInput(_) => {
                ApiError::InvalidParameter(err.to_string())
            }
            _ => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::InvalidParameter(format!("Invalid request body: {}", err.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(err: QueryRejection) -> Self {
        ApiError::InvalidParameter(format!("Invalid query string: {}", err.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_error_mapping() {
        let err = ApiError::from(CallbackError::UnknownOutput("x.y".to_string()));
        assert!(matches!(err, ApiError::UnknownOutput(_)));

        let err = ApiError::from(CallbackError::InvalidInput("bad".to_string()));
        assert!(matches!(err, ApiError::InvalidParameter(_)));

        let err = ApiError::from(CallbackError::Internal("boom".to_string()));
        assert!(matches!(err, ApiError::InternalError(_)));
    }

    #[test]
    fn test_status_codes() {
        let response = ApiError::InvalidParameter("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::UnknownOutput("x.y".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

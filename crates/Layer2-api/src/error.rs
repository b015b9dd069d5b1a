//! API-specific error types
//!
//! ApiError는 HTTP 요청 단계의 에러를 관리합니다.
//! barter_foundation::Error와의 변환을 지원합니다.

use barter_foundation::Error as FoundationError;
use serde_json::Value;
use thiserror::Error;

/// Result alias for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response. The message is what the user sees.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Network error (connection refused, DNS, broken body, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// Request could not be built (bad payload)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Create from HTTP status code and the parsed body (if any)
    ///
    /// Uses the body's `message` field when it is a non-empty string,
    /// otherwise falls back to `Request failed (<status>)`.
    pub fn from_http_status(status: u16, body: Option<&Value>) -> Self {
        let message = body
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed ({})", status));

        ApiError::RequestFailed { status, message }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// barter_foundation::Error 변환
// ============================================================================

impl From<ApiError> for FoundationError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::RequestFailed { status, message } => {
                FoundationError::RequestFailed { status, message }
            }
            ApiError::Network(msg) => FoundationError::Network(msg),
            ApiError::InvalidRequest(msg) => FoundationError::Validation(msg),
            ApiError::InvalidResponse(msg) => FoundationError::InvalidResponse(msg),
        }
    }
}

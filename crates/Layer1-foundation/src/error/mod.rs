//! Error types for Barter
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Barter 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 세션 관련
    // ========================================================================
    /// 토큰 또는 사용자 정보 없음 (로그인 필요)
    #[error("Authentication required: {0}")]
    AuthenticationRequired(String),

    // ========================================================================
    // 저장소 관련
    // ========================================================================
    #[error("Storage error: {0}")]
    Storage(String),

    // ========================================================================
    // HTTP / API 관련
    // ========================================================================
    /// 2xx 이외의 응답 (메시지는 응답 본문에서 추출)
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// 요청 자체가 실패 (연결 불가 등)
    #[error("Network error: {0}")]
    Network(String),

    /// 응답 형식 오류
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    // ========================================================================
    // 일반
    // ========================================================================
    /// 필수 입력 누락 (클라이언트 측 게이트)
    #[error("Validation error: {0}")]
    Validation(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 로그인이 필요한 에러인지 확인
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Error::AuthenticationRequired(_))
    }

    /// 사용자에게 그대로 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::AuthenticationRequired(_)
                | Error::RequestFailed { .. }
                | Error::Validation(_)
        )
    }

    /// HTTP 상태 코드 (RequestFailed인 경우만)
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// RequestFailed 생성 헬퍼
    pub fn request_failed(status: u16, message: impl Into<String>) -> Self {
        Error::RequestFailed {
            status,
            message: message.into(),
        }
    }

    /// AuthenticationRequired 생성 헬퍼
    pub fn auth_required(message: impl Into<String>) -> Self {
        Error::AuthenticationRequired(message.into())
    }
}

// ============================================================================
// From 구현 (추가 변환)
// ============================================================================

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}

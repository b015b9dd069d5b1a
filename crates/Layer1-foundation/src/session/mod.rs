//! Session - 로그인 세션 컨텍스트
//!
//! 토큰과 사용자 정보는 `session.json`에 `authToken`, `user` 키로 저장됩니다.
//! 로더와 요청 함수는 저장소를 직접 읽지 않고, 호출하는 쪽(CLI)이
//! `SessionContext`를 만들어 넘겨줍니다.

use crate::storage::JsonStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 세션 파일명
pub const SESSION_FILE: &str = "session.json";

/// 기본 신뢰 점수 (백엔드 값이 없을 때)
pub const DEFAULT_TRUST_SCORE: f64 = 80.0;

// ============================================================================
// StoredUser
// ============================================================================

/// 로그인 시 저장된 사용자 정보
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    #[serde(default, alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_trades: Option<u32>,

    #[serde(default)]
    pub verified: bool,
}

impl StoredUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

// ============================================================================
// SessionContext
// ============================================================================

/// 요청에 필요한 세션 정보
///
/// `authToken`, `user` 두 키에 대응합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<StoredUser>,
}

impl SessionContext {
    /// 빈 세션 (로그아웃 상태)
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(token: impl Into<String>, user: StoredUser) -> Self {
        Self {
            auth_token: Some(token.into()),
            user: Some(user),
        }
    }

    /// 토큰만 있는 세션
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(token.into()),
            user: None,
        }
    }

    /// 빈 문자열 토큰은 없는 것으로 취급
    pub fn token(&self) -> Option<&str> {
        self.auth_token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.user.is_some()
    }

    /// 토큰 필수
    pub fn require_token(&self) -> Result<&str> {
        self.token()
            .ok_or_else(|| Error::auth_required("missing auth token"))
    }

    /// 사용자 정보 필수
    pub fn require_user(&self) -> Result<&StoredUser> {
        self.user
            .as_ref()
            .ok_or_else(|| Error::auth_required("missing stored user"))
    }
}

// ============================================================================
// SessionStore
// ============================================================================

/// 세션 파일 저장소
#[derive(Debug, Clone)]
pub struct SessionStore {
    store: JsonStore,
}

impl SessionStore {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// 글로벌 디렉토리의 세션
    pub fn global() -> Result<Self> {
        Ok(Self::new(JsonStore::global()?))
    }

    /// 저장된 세션 로드 (없으면 빈 세션)
    pub fn load(&self) -> Result<SessionContext> {
        let session = self
            .store
            .load_optional::<SessionContext>(SESSION_FILE)?
            .unwrap_or_default();
        debug!(
            "Loaded session (token: {}, user: {})",
            session.token().is_some(),
            session.user.is_some()
        );
        Ok(session)
    }

    pub fn save(&self, session: &SessionContext) -> Result<()> {
        self.store.save(SESSION_FILE, session)
    }

    /// 로그아웃 (저장된 세션이 없었으면 false)
    pub fn clear(&self) -> Result<bool> {
        self.store.remove(SESSION_FILE)
    }
}

//! # barter-foundation
//!
//! Foundation layer for Barter:
//! - Error: 공통 에러 타입 (AuthenticationRequired, RequestFailed, Network ...)
//! - Config: 통합 설정 (BarterConfig - API 주소, 출력 옵션)
//! - Storage: JsonStore (설정/세션 파일)
//! - Session: 토큰 + 사용자 정보 (SessionContext)
//! - Notify: 일시적 알림 (Notification, Notifier)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  CLI (Layer4)                                            │
//! │   ├── BarterConfig::load()  ── JsonStore (config.json)  │
//! │   └── SessionStore::load()  ── JsonStore (session.json) │
//! │                     │                                   │
//! │                     ▼  SessionContext (명시적 전달)       │
//! │          Skills Page (Layer3) ── Notifier               │
//! │                     │                                   │
//! │                     ▼                                   │
//! │          ApiClient (Layer2) ── REST API                 │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod notify;
pub mod session;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    BarterConfig, DisplayConfig, API_URL_ENV, BARTER_CONFIG_FILE, DEFAULT_API_BASE,
};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::JsonStore;

// ============================================================================
// Session (세션)
// ============================================================================
pub use session::{SessionContext, SessionStore, StoredUser, DEFAULT_TRUST_SCORE, SESSION_FILE};

// ============================================================================
// Notify (알림)
// ============================================================================
pub use notify::{
    Notification, NotificationId, NotificationLevel, NotificationLog, Notifier, TracingNotifier,
};

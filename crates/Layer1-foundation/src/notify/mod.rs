//! Notification - 사용자에게 보여주는 일시적 알림
//!
//! 페이지 동작(로드, 거래 요청, 스킬 추가)의 성공/실패는 모두
//! `Notification`으로 전달됩니다. 표시 방법은 `Notifier` 구현이 결정합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

// ============================================================================
// NotificationId
// ============================================================================

/// 알림 고유 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub String);

impl NotificationId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// NotificationLevel
// ============================================================================

/// 알림 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    /// 일반 안내 / 성공
    Info,
    /// 실패 (빨간색 토스트)
    Destructive,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Destructive => "destructive",
        }
    }
}

impl Default for NotificationLevel {
    fn default() -> Self {
        Self::Info
    }
}

// ============================================================================
// Notification
// ============================================================================

/// 일시적 알림 (토스트)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub description: String,
    pub level: NotificationLevel,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// 일반 알림
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationLevel::Info)
    }

    /// 실패 알림
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationLevel::Destructive)
    }

    fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        level: NotificationLevel,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            description: description.into(),
            level,
            created_at: Utc::now(),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.level == NotificationLevel::Destructive
    }

    /// 제목/설명에 문자열이 포함되는지
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.contains(needle) || self.description.contains(needle)
    }
}

// ============================================================================
// Notifier Trait
// ============================================================================

/// 알림 수신자
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// 알림을 메모리에 쌓아두는 Notifier
///
/// 테스트와 CLI 출력 버퍼로 사용됩니다. clone 하면 같은 버퍼를 공유합니다.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지의 알림 복사본
    pub fn all(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// 버퍼를 비우면서 꺼내기
    pub fn drain(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .map(|mut entries| std::mem::take(&mut *entries))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last(&self) -> Option<Notification> {
        self.entries.lock().ok().and_then(|e| e.last().cloned())
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(notification);
        }
    }
}

/// 알림을 tracing 로그로만 남기는 Notifier
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info => {
                info!("{}: {}", notification.title, notification.description)
            }
            NotificationLevel::Destructive => {
                warn!("{}: {}", notification.title, notification.description)
            }
        }
    }
}

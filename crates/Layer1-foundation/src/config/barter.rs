//! Barter Config - 통합 설정
//!
//! API 주소와 출력 옵션을 관리하는 BarterConfig

use crate::storage::JsonStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 설정 파일명
pub const BARTER_CONFIG_FILE: &str = "config.json";

/// API 주소 오버라이드 환경변수
pub const API_URL_ENV: &str = "BARTER_API_URL";

/// 기본 API 주소
pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// 기본 설명 줄바꿈 폭
pub const DEFAULT_DESCRIPTION_WIDTH: usize = 80;

// ============================================================================
// Barter Config (통합)
// ============================================================================

/// Barter 통합 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarterConfig {
    /// 버전 (마이그레이션용)
    #[serde(default = "default_version")]
    pub version: u32,

    /// 백엔드 API 주소
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    /// 출력 설정
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for BarterConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            api_base_url: None,
            display: DisplayConfig::default(),
        }
    }
}

impl BarterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 글로벌 + 프로젝트 병합 로드, 마지막으로 환경변수 적용
    pub fn load() -> Result<Self> {
        let mut config = Self::new();

        // 1. 글로벌 설정
        if let Ok(global) = JsonStore::global() {
            if let Some(global_config) = read_layer(&global)? {
                config.merge(global_config);
            }
        }

        // 2. 프로젝트 설정
        if let Ok(project) = JsonStore::current_project() {
            if let Some(project_config) = read_layer(&project)? {
                config.merge(project_config);
            }
        }

        // 3. 환경변수 오버라이드
        config.apply_env_override(std::env::var(API_URL_ENV).ok());

        Ok(config)
    }

    /// 특정 저장소에서만 로드
    pub fn load_from(store: &JsonStore) -> Result<Self> {
        Ok(read_layer(store)?.unwrap_or_default())
    }

    /// 환경변수 값 적용 (빈 문자열은 무시)
    pub fn apply_env_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            debug!("API base URL overridden by {}", API_URL_ENV);
            self.api_base_url = Some(url);
        }
    }

    /// 환경변수 값 적용 (빌더)
    pub fn with_env_override(mut self, api_url: Option<String>) -> Self {
        self.apply_env_override(api_url);
        self
    }

    /// 실제 사용할 API 주소
    pub fn api_base(&self) -> String {
        self.api_base_url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string()
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: BarterConfig) {
        if other.api_base_url.is_some() {
            self.api_base_url = other.api_base_url;
        }
        self.display.merge(other.display);
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }
}

// ============================================================================
// Display Config
// ============================================================================

/// 출력 설정 (CLI)
///
/// 파일에 적힌 값만 `Some`이고, 병합 시 있는 값만 덮어씁니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    /// 카드 설명 줄바꿈 폭
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_width: Option<usize>,

    /// 알림 출력 여부
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_notifications: Option<bool>,
}

impl DisplayConfig {
    pub fn description_width(&self) -> usize {
        self.description_width.unwrap_or(DEFAULT_DESCRIPTION_WIDTH)
    }

    pub fn show_notifications(&self) -> bool {
        self.show_notifications.unwrap_or(true)
    }

    fn merge(&mut self, other: DisplayConfig) {
        if other.description_width.is_some() {
            self.description_width = other.description_width;
        }
        if other.show_notifications.is_some() {
            self.show_notifications = other.show_notifications;
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// 설정 파일 한 층 읽기 (형식 오류는 Config 에러)
fn read_layer(store: &JsonStore) -> Result<Option<BarterConfig>> {
    store
        .load_optional::<BarterConfig>(BARTER_CONFIG_FILE)
        .map_err(|e| Error::Config(e.to_string()))
}

fn default_version() -> u32 {
    1
}

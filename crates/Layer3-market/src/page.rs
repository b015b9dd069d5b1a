//! Skills Barter 페이지 상태
//!
//! 마운트 → 로드 → (검색/카테고리 변경마다) 필터 → 카드 표시 →
//! 거래 요청 / 스킬 추가 → 알림 → (스킬 추가 후) 다시 로드.
//!
//! 모든 실패는 해당 동작 안에서 `Notification`으로 바뀌고, 호출자에게는
//! `ActionOutcome`만 돌려줍니다.

use crate::filter::{self, SkillFilter};
use crate::loader;
use crate::offer::SkillOffer;
use crate::submit::{self, NewSkillDraft};
use barter_api::ApiClient;
use barter_foundation::{Error, Notification, Notifier, SessionContext};
use std::sync::Arc;
use tracing::{debug, warn};

// ============================================================================
// 상태 타입
// ============================================================================

/// 목록 영역 표시 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// 스켈레톤
    Loading,
    /// "No skills found"
    Empty,
    /// 카드 그리드
    Populated,
}

/// 사용자 동작의 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// 요청 성공
    Completed,
    /// 아무것도 하지 않음 (선택 없음, 입력 부족)
    Skipped,
    /// 실패 (알림으로 보고됨)
    Failed,
}

impl ActionOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ActionOutcome::Failed)
    }
}

// ============================================================================
// SkillsPage
// ============================================================================

/// 스킬 마켓플레이스 페이지 한 개의 상태
pub struct SkillsPage {
    client: ApiClient,
    session: SessionContext,
    notifier: Arc<dyn Notifier>,

    /// 전체 목록 (로드마다 통째로 교체)
    skills: Vec<SkillOffer>,
    filter: SkillFilter,
    is_loading: bool,

    /// 거래 요청 다이얼로그
    selected_skill: Option<SkillOffer>,
    connect_dialog_open: bool,

    /// 스킬 추가 다이얼로그
    add_skill_open: bool,
    new_skill: NewSkillDraft,
}

impl SkillsPage {
    pub fn new(client: ApiClient, session: SessionContext, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            session,
            notifier,
            skills: Vec::new(),
            filter: SkillFilter::default(),
            is_loading: true,
            selected_skill: None,
            connect_dialog_open: false,
            add_skill_open: false,
            new_skill: NewSkillDraft::default(),
        }
    }

    // ========================================================================
    // 로드
    // ========================================================================

    /// 페이지 마운트 시 최초 로드
    pub async fn mount(&mut self) -> ActionOutcome {
        self.reload().await
    }

    /// 목록 전체를 다시 가져옴
    pub async fn reload(&mut self) -> ActionOutcome {
        self.is_loading = true;

        let outcome = match loader::load_skills(&self.client, &self.session).await {
            Ok(skills) => {
                self.skills = skills;
                ActionOutcome::Completed
            }
            Err(e) => {
                self.skills.clear();
                if e.is_auth_required() {
                    self.notify(Notification::destructive(
                        "Authentication required",
                        "Please log in to access the skills marketplace",
                    ));
                } else {
                    warn!("Error fetching skills: {}", e);
                    self.notify(Notification::destructive(
                        "Error loading skills",
                        format!(
                            "We couldn't load the skills marketplace ({}). Please try again later.",
                            e
                        ),
                    ));
                }
                ActionOutcome::Failed
            }
        };

        self.is_loading = false;
        outcome
    }

    // ========================================================================
    // 필터
    // ========================================================================

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn filter(&self) -> &SkillFilter {
        &self.filter
    }

    /// 현재 필터가 적용된 목록 (매번 다시 계산)
    pub fn filtered(&self) -> Vec<SkillOffer> {
        self.filter.apply(&self.skills)
    }

    /// 카테고리 선택지
    pub fn categories(&self) -> Vec<String> {
        filter::categories(&self.skills)
    }

    pub fn view_state(&self) -> ViewState {
        if self.is_loading {
            ViewState::Loading
        } else if self.skills.iter().any(|s| self.filter.matches(s)) {
            ViewState::Populated
        } else {
            ViewState::Empty
        }
    }

    // ========================================================================
    // 거래 요청
    // ========================================================================

    /// "Connect" 버튼: 스킬 선택 + 다이얼로그 열기
    pub fn open_connect(&mut self, skill: SkillOffer) {
        self.selected_skill = Some(skill);
        self.connect_dialog_open = true;
    }

    /// ID로 스킬 선택 (목록에 없으면 false)
    pub fn select_skill(&mut self, skill_id: &str) -> bool {
        match self.skills.iter().find(|s| s.id == skill_id).cloned() {
            Some(skill) => {
                self.open_connect(skill);
                true
            }
            None => false,
        }
    }

    pub fn close_connect(&mut self) {
        self.connect_dialog_open = false;
    }

    /// 선택한 스킬의 제공자에게 거래 요청
    pub async fn send_trade_request(&mut self) -> ActionOutcome {
        let Some(skill) = self.selected_skill.clone() else {
            debug!("No skill selected");
            return ActionOutcome::Skipped;
        };

        if self.session.token().is_none() {
            self.notify(Notification::destructive(
                "Authentication required",
                "Please log in to send connection requests",
            ));
            return ActionOutcome::Failed;
        }

        match submit::send_trade_request(&self.client, &self.session, &skill).await {
            Ok(_) => {
                self.notify(Notification::info(
                    "Trade Request Sent!",
                    format!(
                        "Your request was sent to {} for {}. You'll be notified when they respond.",
                        skill.user_name, skill.skill_name
                    ),
                ));
                self.connect_dialog_open = false;
                self.selected_skill = None;
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!("Send connection request error: {}", e);
                self.notify(Notification::destructive(
                    "Connection Error",
                    error_description(&e, "Failed to send the request. Please try again later."),
                ));
                ActionOutcome::Failed
            }
        }
    }

    // ========================================================================
    // 스킬 추가
    // ========================================================================

    pub fn open_add_skill(&mut self) {
        self.add_skill_open = true;
    }

    pub fn close_add_skill(&mut self) {
        self.add_skill_open = false;
    }

    pub fn draft(&self) -> &NewSkillDraft {
        &self.new_skill
    }

    pub fn draft_mut(&mut self) -> &mut NewSkillDraft {
        &mut self.new_skill
    }

    pub fn set_draft(&mut self, draft: NewSkillDraft) {
        self.new_skill = draft;
    }

    /// "Add Skill" 버튼 활성화 여부
    pub fn can_submit_new_skill(&self) -> bool {
        self.new_skill.can_submit()
    }

    /// 스킬 등록 후 성공하면 목록을 다시 로드
    pub async fn submit_new_skill(&mut self) -> ActionOutcome {
        if !self.new_skill.can_submit() {
            debug!("Add skill disabled: name and category are required");
            return ActionOutcome::Skipped;
        }

        if self.session.token().is_none() {
            self.notify(Notification::destructive(
                "Authentication required",
                "Please log in to add a skill.",
            ));
            return ActionOutcome::Failed;
        }

        match submit::create_offering(&self.client, &self.session, &self.new_skill).await {
            Ok(_) => {
                self.add_skill_open = false;
                self.new_skill.reset();
                self.notify(Notification::info(
                    "Skill Added!",
                    "Your skill is now visible to others.",
                ));
                self.reload().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!("Add skill error: {}", e);
                self.notify(Notification::destructive(
                    "Error adding skill",
                    error_description(&e, "Failed to add skill."),
                ));
                ActionOutcome::Failed
            }
        }
    }

    // ========================================================================
    // 조회
    // ========================================================================

    pub fn skills(&self) -> &[SkillOffer] {
        &self.skills
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn selected_skill(&self) -> Option<&SkillOffer> {
        self.selected_skill.as_ref()
    }

    pub fn is_connect_dialog_open(&self) -> bool {
        self.connect_dialog_open
    }

    pub fn is_add_skill_open(&self) -> bool {
        self.add_skill_open
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }
}

/// 에러 메시지, 비어 있으면 기본 문구
fn error_description(error: &Error, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

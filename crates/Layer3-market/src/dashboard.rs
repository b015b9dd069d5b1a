//! 대시보드 요약
//!
//! 저장된 사용자 정보로 인사말, 신뢰 점수, 거래 수를 만듭니다.
//! 등록한 스킬 수는 목록을 불러온 경우에만 채워집니다.

use crate::offer::SkillOffer;
use barter_foundation::{Result, SessionContext, DEFAULT_TRUST_SCORE};
use serde::Serialize;

/// 대시보드 상단 요약
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user_id: String,
    pub name: String,
    pub trust_score: f64,
    pub completed_trades: u32,
    pub verified: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_skills: Option<usize>,
}

impl DashboardSummary {
    /// 세션의 사용자 정보로 요약 생성 (사용자 정보 필수)
    pub fn from_session(session: &SessionContext) -> Result<Self> {
        let user = session.require_user()?;

        Ok(Self {
            user_id: user.id.clone(),
            name: user.name.clone(),
            trust_score: user
                .trust_score
                .filter(|s| *s != 0.0 && !s.is_nan())
                .unwrap_or(DEFAULT_TRUST_SCORE),
            completed_trades: user.completed_trades.unwrap_or(0),
            verified: user.verified,
            listed_skills: None,
        })
    }

    /// 목록에서 현재 사용자가 올린 스킬 수 반영
    pub fn with_listing(mut self, offers: &[SkillOffer]) -> Self {
        self.listed_skills = Some(offers.iter().filter(|o| o.user_id == self.user_id).count());
        self
    }

    pub fn greeting(&self) -> String {
        if self.name.is_empty() {
            "Welcome back!".to_string()
        } else {
            format!("Welcome back, {}!", self.name)
        }
    }

    /// "85/100"
    pub fn trust_label(&self) -> String {
        format!("{}/100", self.trust_score.round() as i64)
    }
}

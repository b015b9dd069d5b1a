//! # barter-market
//!
//! Skills Barter 마켓플레이스
//!
//! - `offer`: 백엔드 사용자 목록 → `SkillOffer` 평탄화
//! - `loader`: 목록 조회
//! - `filter`: 검색어 / 카테고리 필터
//! - `submit`: 거래 요청, 스킬 등록
//! - `page`: 페이지 상태와 사용자 동작
//! - `dashboard`: 대시보드 요약

pub mod dashboard;
pub mod filter;
pub mod loader;
pub mod offer;
pub mod page;
pub mod submit;

pub use dashboard::DashboardSummary;
pub use filter::{categories, filter_by_category, filter_by_query, SkillFilter, ALL_CATEGORIES};
pub use loader::load_skills;
pub use offer::{flatten_offers, Offering, SkillOffer, UserRecord, UsersResponse};
pub use page::{ActionOutcome, SkillsPage, ViewState};
pub use submit::{
    create_offering, send_trade_request, NewSkillDraft, OfferingPayload, TradeRequest,
};

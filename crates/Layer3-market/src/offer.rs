//! SkillOffer - 마켓플레이스 카드 한 장
//!
//! 백엔드의 사용자 목록(각 사용자의 offerings 포함)을 평탄화해서
//! (사용자, 스킬) 쌍마다 하나의 `SkillOffer`를 만듭니다.

use barter_foundation::{Error, Result, DEFAULT_TRUST_SCORE};
use serde::{Deserialize, Serialize};

/// 스킬 타입 태그
pub const SKILL_TYPE: &str = "skill";

/// 아바타 없음
pub const PLACEHOLDER_AVATAR: &str = "/placeholder-user.jpg";

/// 위치 없음
pub const UNKNOWN_LOCATION: &str = "Location not specified";

/// 카테고리 없음
pub const DEFAULT_CATEGORY: &str = "Other";

/// 경력 없음
pub const DEFAULT_EXPERIENCE: &str = "Not specified";

/// 설명 없음
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

// ============================================================================
// SkillOffer - 표시용 레코드
// ============================================================================

/// 사용자 한 명의 스킬 하나 (조회 시점 스냅샷)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillOffer {
    /// 오퍼링 ID (백엔드 할당)
    pub id: String,

    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub user_location: String,
    pub user_trust_score: f64,
    pub completed_trades: u32,

    pub skill_name: String,
    pub skill_category: String,
    pub experience: String,
    pub description: String,
}

// ============================================================================
// 백엔드 응답 형식
// ============================================================================

/// `GET /api/users?hasSkillOfferings=true` 응답
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserRecord>,
}

/// 사용자 레코드
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub location: Option<UserLocation>,

    #[serde(default)]
    pub trust_score: Option<f64>,

    #[serde(default)]
    pub completed_trades: Option<u32>,

    #[serde(default)]
    pub offerings: Vec<Offering>,
}

/// 사용자 위치
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserLocation {
    #[serde(default)]
    pub address: Option<String>,
}

/// 오퍼링 (스킬, 물품 등)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Offering {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub experience: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Offering {
    pub fn is_skill(&self) -> bool {
        self.kind.as_deref() == Some(SKILL_TYPE)
    }
}

// ============================================================================
// 평탄화
// ============================================================================

/// 사용자 목록 → SkillOffer 목록
///
/// `type == "skill"`인 오퍼링만 포함하고, 순서는 (사용자, 오퍼링) 순서를 유지합니다.
/// ID가 없는 스킬 오퍼링이 있으면 응답 전체를 잘못된 것으로 봅니다.
pub fn flatten_offers(users: &[UserRecord]) -> Result<Vec<SkillOffer>> {
    let mut offers = Vec::new();

    for user in users {
        for offering in user.offerings.iter().filter(|o| o.is_skill()) {
            offers.push(to_offer(user, offering)?);
        }
    }

    Ok(offers)
}

fn to_offer(user: &UserRecord, offering: &Offering) -> Result<SkillOffer> {
    let id = offering
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            Error::InvalidResponse(format!(
                "skill offering '{}' of user {} has no id",
                offering.title, user.id
            ))
        })?;

    let location = user.location.as_ref().and_then(|l| l.address.as_deref());

    Ok(SkillOffer {
        id,
        user_id: user.id.clone(),
        user_name: user.name.clone(),
        user_avatar: or_default(user.avatar.as_deref(), PLACEHOLDER_AVATAR),
        user_location: or_default(location, UNKNOWN_LOCATION),
        user_trust_score: user
            .trust_score
            .filter(|s| *s != 0.0 && !s.is_nan())
            .unwrap_or(DEFAULT_TRUST_SCORE),
        completed_trades: user.completed_trades.unwrap_or(0),
        skill_name: offering.title.clone(),
        skill_category: or_default(offering.category.as_deref(), DEFAULT_CATEGORY),
        experience: or_default(offering.experience.as_deref(), DEFAULT_EXPERIENCE),
        description: or_default(offering.description.as_deref(), DEFAULT_DESCRIPTION),
    })
}

/// 없거나 빈 문자열이면 기본값
fn or_default(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

//! 스킬 목록 로더

use crate::offer::{flatten_offers, SkillOffer, UsersResponse};
use barter_api::{endpoints, ApiClient, ApiRequest};
use barter_foundation::{Result, SessionContext};
use tracing::{debug, info};

/// 스킬을 가진 사용자 전체를 가져와 `SkillOffer` 목록으로 평탄화
///
/// 토큰과 사용자 정보가 모두 있어야 하며, 없으면 요청 없이
/// `AuthenticationRequired`를 반환합니다.
pub async fn load_skills(client: &ApiClient, session: &SessionContext) -> Result<Vec<SkillOffer>> {
    let token = session.require_token()?;
    session.require_user()?;

    debug!("Fetching skill offerings");
    let response: UsersResponse = client
        .send_as(ApiRequest::get(endpoints::USERS_WITH_SKILLS).token(token))
        .await?;

    let offers = flatten_offers(&response.users)?;
    info!(
        "Loaded {} skill offers from {} users",
        offers.len(),
        response.users.len()
    );

    Ok(offers)
}

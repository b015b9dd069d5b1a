//! 거래 요청 / 스킬 등록 요청

use crate::offer::{SkillOffer, SKILL_TYPE};
use barter_api::{endpoints, ApiClient, ApiRequest};
use barter_foundation::{Error, Result, SessionContext};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

// ============================================================================
// 거래 요청
// ============================================================================

/// `POST /api/users/connect` 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub recipient_id: String,
    pub skill_id: String,
}

impl TradeRequest {
    pub fn for_offer(offer: &SkillOffer) -> Self {
        Self {
            recipient_id: offer.user_id.clone(),
            skill_id: offer.id.clone(),
        }
    }
}

/// 스킬 제공자에게 거래 요청 보내기
pub async fn send_trade_request(
    client: &ApiClient,
    session: &SessionContext,
    offer: &SkillOffer,
) -> Result<Option<Value>> {
    let token = session.require_token()?;
    let body = TradeRequest::for_offer(offer);

    debug!("Sending trade request to {} for {}", body.recipient_id, body.skill_id);
    let request = ApiRequest::post(endpoints::CONNECT).json(&body)?.token(token);
    let data = client.send(request).await?;

    info!("Trade request sent to {}", offer.user_name);
    Ok(data)
}

// ============================================================================
// 스킬 등록
// ============================================================================

/// 스킬 추가 입력값
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSkillDraft {
    pub skill_name: String,
    pub skill_category: String,
    pub experience: String,
    pub description: String,
}

impl NewSkillDraft {
    pub fn new(skill_name: impl Into<String>, skill_category: impl Into<String>) -> Self {
        Self {
            skill_name: skill_name.into(),
            skill_category: skill_category.into(),
            ..Default::default()
        }
    }

    pub fn experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = experience.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 이름과 카테고리가 있어야 제출 가능
    pub fn can_submit(&self) -> bool {
        !self.skill_name.is_empty() && !self.skill_category.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.skill_name.is_empty() {
            return Err(Error::Validation("skill name is required".to_string()));
        }
        if self.skill_category.is_empty() {
            return Err(Error::Validation("skill category is required".to_string()));
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_payload(&self) -> OfferingPayload {
        OfferingPayload {
            title: self.skill_name.clone(),
            category: self.skill_category.clone(),
            experience: self.experience.clone(),
            description: self.description.clone(),
            kind: SKILL_TYPE.to_string(),
        }
    }
}

/// `POST /api/users/offerings` 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferingPayload {
    pub title: String,
    pub category: String,
    pub experience: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// 현재 사용자 스킬 등록
pub async fn create_offering(
    client: &ApiClient,
    session: &SessionContext,
    draft: &NewSkillDraft,
) -> Result<Option<Value>> {
    let token = session.require_token()?;
    draft.validate()?;

    let request = ApiRequest::post(endpoints::OFFERINGS)
        .json(&draft.to_payload())?
        .token(token);
    let data = client.send(request).await?;

    info!("Skill '{}' added", draft.skill_name);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use barter_api::testing::MockTransport;
    use barter_api::Method;
    use barter_foundation::StoredUser;
    use serde_json::json;
    use std::sync::Arc;

    fn offer() -> SkillOffer {
        SkillOffer {
            id: "o1".to_string(),
            user_id: "u1".to_string(),
            user_name: "Jun".to_string(),
            user_avatar: "/placeholder-user.jpg".to_string(),
            user_location: "Busan".to_string(),
            user_trust_score: 80.0,
            completed_trades: 0,
            skill_name: "Guitar".to_string(),
            skill_category: "Music".to_string(),
            experience: "Not specified".to_string(),
            description: "No description provided".to_string(),
        }
    }

    fn session() -> SessionContext {
        SessionContext::new("tok", StoredUser::new("me", "Mina"))
    }

    #[test]
    fn test_draft_gate() {
        assert!(!NewSkillDraft::default().can_submit());
        assert!(!NewSkillDraft::new("Guitar", "").can_submit());
        assert!(!NewSkillDraft::new("", "Music").can_submit());
        assert!(NewSkillDraft::new("Guitar", "Music").can_submit());

        let err = NewSkillDraft::new("Guitar", "").validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_payload_shape() {
        let draft = NewSkillDraft::new("Guitar", "Music")
            .experience("3 years")
            .description("Acoustic basics");
        let json = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(
            json,
            json!({
                "title": "Guitar",
                "category": "Music",
                "experience": "3 years",
                "description": "Acoustic basics",
                "type": "skill"
            })
        );
    }

    #[test]
    fn test_reset() {
        let mut draft = NewSkillDraft::new("Guitar", "Music").experience("1 year");
        draft.reset();
        assert_eq!(draft, NewSkillDraft::default());
    }

    #[tokio::test]
    async fn test_trade_request_body() {
        let mock = Arc::new(MockTransport::new().respond_json(
            Method::Post,
            endpoints::CONNECT,
            200,
            json!({ "success": true }),
        ));
        let client = ApiClient::with_transport("http://localhost:3001", mock.clone());

        send_trade_request(&client, &session(), &offer()).await.unwrap();

        assert_eq!(
            mock.last_json(),
            Some(json!({ "recipientId": "u1", "skillId": "o1" }))
        );
        assert_eq!(mock.requests()[0].header("Authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_create_offering_requires_token() {
        let mock = Arc::new(MockTransport::new());
        let client = ApiClient::with_transport("http://localhost:3001", mock.clone());

        let err = create_offering(
            &client,
            &SessionContext::anonymous(),
            &NewSkillDraft::new("Guitar", "Music"),
        )
        .await
        .unwrap_err();

        assert!(err.is_auth_required());
        assert_eq!(mock.total(), 0);
    }
}

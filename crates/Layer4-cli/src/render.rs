//! 텍스트 렌더링 (카드, 알림, 대시보드)

use barter_foundation::{Notification, NotificationLevel};
use barter_market::{DashboardSummary, SkillOffer, ViewState};

/// 스킬 카드 한 장
pub fn skill_card(offer: &SkillOffer, width: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} [{}]  (id: {})\n",
        offer.skill_name, offer.skill_category, offer.id
    ));
    out.push_str(&format!(
        "  {} · {} · trust {}/100 · {} trades\n",
        offer.user_name,
        offer.user_location,
        offer.user_trust_score.round() as i64,
        offer.completed_trades
    ));
    out.push_str(&format!("  Experience: {}\n", offer.experience));

    let width = width.max(20);
    for line in textwrap::wrap(&offer.description, width.saturating_sub(2)) {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// 목록 전체
pub fn skill_list(offers: &[SkillOffer], state: ViewState, width: usize) -> String {
    match state {
        ViewState::Loading => "Loading skills...\n".to_string(),
        ViewState::Empty => {
            "No skills found\nTry adjusting your search or filters to find what you're looking for.\n"
                .to_string()
        }
        ViewState::Populated => {
            let cards: Vec<String> = offers.iter().map(|o| skill_card(o, width)).collect();
            cards.join("\n")
        }
    }
}

pub fn notification(notification: &Notification) -> String {
    let marker = match notification.level {
        NotificationLevel::Info => "✓",
        NotificationLevel::Destructive => "✗",
    };
    format!("{} {}: {}", marker, notification.title, notification.description)
}

pub fn dashboard(summary: &DashboardSummary) -> String {
    let mut out = format!("{}\n\n", summary.greeting());
    out.push_str(&format!("  Trust Score       {}\n", summary.trust_label()));
    out.push_str(&format!("  Completed Trades  {}\n", summary.completed_trades));
    out.push_str(&format!(
        "  Verified          {}\n",
        if summary.verified { "yes" } else { "no" }
    ));
    if let Some(count) = summary.listed_skills {
        out.push_str(&format!("  Listed Skills     {}\n", count));
    }
    out.push_str("\nList a skill: barter skills add --name <NAME> --category <CATEGORY>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use barter_foundation::{SessionContext, StoredUser};

    fn offer() -> SkillOffer {
        SkillOffer {
            id: "o1".to_string(),
            user_id: "u1".to_string(),
            user_name: "Mina".to_string(),
            user_avatar: "/placeholder-user.jpg".to_string(),
            user_location: "Seoul".to_string(),
            user_trust_score: 92.4,
            completed_trades: 3,
            skill_name: "Logo Design".to_string(),
            skill_category: "Design".to_string(),
            experience: "5 years".to_string(),
            description: "Brand marks and simple identity systems for small shops".to_string(),
        }
    }

    #[test]
    fn test_card_contains_fields() {
        let card = skill_card(&offer(), 80);
        assert!(card.starts_with("Logo Design [Design]  (id: o1)"));
        assert!(card.contains("Mina · Seoul · trust 92/100 · 3 trades"));
        assert!(card.contains("Experience: 5 years"));
    }

    #[test]
    fn test_card_wraps_description() {
        let card = skill_card(&offer(), 24);
        let description_lines = card.lines().skip(3).count();
        assert!(description_lines > 1);
        assert!(card.lines().skip(3).all(|l| l.len() <= 24));
    }

    #[test]
    fn test_empty_state() {
        assert!(skill_list(&[], ViewState::Empty, 80).starts_with("No skills found"));
    }

    #[test]
    fn test_notification_marker() {
        let n = Notification::destructive("Connection Error", "boom");
        assert_eq!(notification(&n), "✗ Connection Error: boom");
    }

    #[test]
    fn test_dashboard_text() {
        let session = SessionContext::new("tok", StoredUser::new("u1", "Mina"));
        let summary = DashboardSummary::from_session(&session).unwrap();
        let text = dashboard(&summary);
        assert!(text.starts_with("Welcome back, Mina!"));
        assert!(text.contains("80/100"));
        assert!(!text.contains("Listed Skills"));
    }
}

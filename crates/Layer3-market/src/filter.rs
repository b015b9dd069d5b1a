//! 클라이언트 측 필터
//!
//! 검색어(대소문자 무시 부분 일치)와 카테고리(정확히 일치, `"all"`은 제한 없음)로
//! 목록을 거릅니다. 순수 함수이며 원래 순서를 유지합니다.

use crate::offer::SkillOffer;

/// 카테고리 제한 없음
pub const ALL_CATEGORIES: &str = "all";

/// 검색어 + 카테고리
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillFilter {
    pub query: String,
    pub category: String,
}

impl Default for SkillFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl SkillFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// 아무 제한도 없는지
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty() && self.category == ALL_CATEGORIES
    }

    /// 스킬 이름, 사용자 이름, 설명, 위치 중 하나라도 검색어를 포함하는지
    pub fn matches_query(&self, skill: &SkillOffer) -> bool {
        matches_query(skill, &self.query.to_lowercase())
    }

    pub fn matches_category(&self, skill: &SkillOffer) -> bool {
        self.category == ALL_CATEGORIES || skill.skill_category == self.category
    }

    pub fn matches(&self, skill: &SkillOffer) -> bool {
        self.matches_query(skill) && self.matches_category(skill)
    }

    /// 필터 적용
    pub fn apply(&self, skills: &[SkillOffer]) -> Vec<SkillOffer> {
        let query = self.query.to_lowercase();
        skills
            .iter()
            .filter(|s| matches_query(s, &query) && self.matches_category(s))
            .cloned()
            .collect()
    }
}

fn matches_query(skill: &SkillOffer, lowered_query: &str) -> bool {
    if lowered_query.is_empty() {
        return true;
    }
    [
        &skill.skill_name,
        &skill.user_name,
        &skill.description,
        &skill.user_location,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(lowered_query))
}

/// 검색어로만 거르기
pub fn filter_by_query(skills: &[SkillOffer], query: &str) -> Vec<SkillOffer> {
    SkillFilter::new().query(query).apply(skills)
}

/// 카테고리로만 거르기
pub fn filter_by_category(skills: &[SkillOffer], category: &str) -> Vec<SkillOffer> {
    SkillFilter::new().category(category).apply(skills)
}

/// 카테고리 선택지: `"all"` + 처음 등장한 순서대로 중복 없이
pub fn categories(skills: &[SkillOffer]) -> Vec<String> {
    let mut result = vec![ALL_CATEGORIES.to_string()];
    for skill in skills {
        if !result.contains(&skill.skill_category) {
            result.push(skill.skill_category.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: &str, name: &str, category: &str, user: &str, location: &str) -> SkillOffer {
        SkillOffer {
            id: id.to_string(),
            user_id: format!("user-{}", id),
            user_name: user.to_string(),
            user_avatar: "/placeholder-user.jpg".to_string(),
            user_location: location.to_string(),
            user_trust_score: 80.0,
            completed_trades: 0,
            skill_name: name.to_string(),
            skill_category: category.to_string(),
            experience: "Not specified".to_string(),
            description: format!("{} lessons", name),
        }
    }

    fn sample() -> Vec<SkillOffer> {
        vec![
            offer("1", "Logo Design", "Design", "Mina", "Seoul"),
            offer("2", "Guitar", "Music", "Jun", "Busan"),
            offer("3", "Rust Tutoring", "Tech", "Sora", "Seoul"),
            offer("4", "Poster Design", "Design", "Noa", "Incheon"),
            offer("5", "Piano", "Music", "Hana", "Daegu"),
        ]
    }

    fn ids(skills: &[SkillOffer]) -> Vec<&str> {
        skills.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_unconstrained_returns_full_list() {
        let skills = sample();
        let filter = SkillFilter::new();
        assert!(filter.is_unconstrained());
        assert_eq!(filter.apply(&skills), skills);
    }

    #[test]
    fn test_category_keeps_relative_order() {
        let skills = sample();
        let design = SkillFilter::new().category("Design").apply(&skills);
        assert_eq!(ids(&design), vec!["1", "4"]);
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let skills = sample();

        // 스킬 이름
        assert_eq!(ids(&filter_by_query(&skills, "GUITAR")), vec!["2"]);
        // 사용자 이름
        assert_eq!(ids(&filter_by_query(&skills, "sora")), vec!["3"]);
        // 위치
        assert_eq!(ids(&filter_by_query(&skills, "seoul")), vec!["1", "3"]);
        // 설명
        assert_eq!(ids(&filter_by_query(&skills, "piano lessons")), vec!["5"]);
        // 일치 없음
        assert!(filter_by_query(&skills, "welding").is_empty());
    }

    #[test]
    fn test_query_and_category_commute() {
        let skills = sample();
        let cases = [
            ("design", "Design"),
            ("seoul", "Tech"),
            ("o", "Music"),
            ("", "all"),
            ("zzz", "Design"),
        ];

        for (query, category) in cases {
            let query_first = filter_by_category(&filter_by_query(&skills, query), category);
            let category_first = filter_by_query(&filter_by_category(&skills, category), query);
            let combined = SkillFilter::new().query(query).category(category).apply(&skills);

            assert_eq!(query_first, category_first, "{} / {}", query, category);
            assert_eq!(query_first, combined, "{} / {}", query, category);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let skills = sample();
        let filter = SkillFilter::new().query("s").category("Design");
        let once = filter.apply(&skills);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let skills = sample();
        assert!(filter_by_category(&skills, "design").is_empty());
    }

    #[test]
    fn test_categories() {
        let skills = sample();
        assert_eq!(categories(&skills), vec!["all", "Design", "Music", "Tech"]);
        assert_eq!(categories(&[]), vec!["all"]);
    }
}

//! 서브커맨드 실행
//!
//! 각 함수는 화면에 출력할 텍스트와 `ActionOutcome`을 돌려주고,
//! 출력과 종료 코드는 `main`에서 처리합니다.

use crate::render;
use anyhow::Context;
use barter_api::ApiClient;
use barter_foundation::{Notifier, SessionContext, SessionStore, StoredUser};
use barter_market::{ActionOutcome, DashboardSummary, NewSkillDraft, SkillsPage};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// 명령 실행 결과
#[derive(Debug)]
pub struct CommandOutput {
    pub outcome: ActionOutcome,
    pub text: String,
}

impl CommandOutput {
    fn new(outcome: ActionOutcome, text: impl Into<String>) -> Self {
        Self {
            outcome,
            text: text.into(),
        }
    }
}

/// 명령 실행에 필요한 공통 환경
pub struct Env {
    pub client: ApiClient,
    pub session: SessionContext,
    pub notifier: Arc<dyn Notifier>,
    pub description_width: usize,
}

impl Env {
    fn page(&self) -> SkillsPage {
        SkillsPage::new(
            self.client.clone(),
            self.session.clone(),
            self.notifier.clone(),
        )
    }
}

// ============================================================================
// status / dashboard
// ============================================================================

pub async fn status(env: &Env) -> anyhow::Result<CommandOutput> {
    let value = env.client.status_check().await;
    let outcome = if value.get("success") == Some(&serde_json::Value::Bool(false)) {
        ActionOutcome::Failed
    } else {
        ActionOutcome::Completed
    };
    Ok(CommandOutput::new(
        outcome,
        serde_json::to_string_pretty(&value)?,
    ))
}

pub async fn dashboard(env: &Env) -> anyhow::Result<CommandOutput> {
    let summary = match DashboardSummary::from_session(&env.session) {
        Ok(summary) => summary,
        Err(e) => {
            return Ok(CommandOutput::new(
                ActionOutcome::Failed,
                format!("{}. Run 'barter session set' first.", e),
            ))
        }
    };

    let mut page = env.page();
    let summary = match page.mount().await {
        ActionOutcome::Completed => summary.with_listing(page.skills()),
        _ => {
            warn!("Dashboard shown without listing");
            summary
        }
    };

    Ok(CommandOutput::new(
        ActionOutcome::Completed,
        render::dashboard(&summary),
    ))
}

// ============================================================================
// skills
// ============================================================================

pub async fn skills_list(
    env: &Env,
    query: Option<String>,
    category: Option<String>,
) -> anyhow::Result<CommandOutput> {
    let mut page = env.page();
    let outcome = page.mount().await;

    if let Some(query) = query {
        page.set_query(query);
    }
    if let Some(category) = category {
        page.set_category(category);
    }

    let text = render::skill_list(&page.filtered(), page.view_state(), env.description_width);
    Ok(CommandOutput::new(outcome, text))
}

pub async fn skills_categories(env: &Env) -> anyhow::Result<CommandOutput> {
    let mut page = env.page();
    let outcome = page.mount().await;
    Ok(CommandOutput::new(outcome, page.categories().join("\n")))
}

pub async fn skills_connect(env: &Env, skill_id: &str) -> anyhow::Result<CommandOutput> {
    let mut page = env.page();
    let outcome = page.mount().await;
    if outcome.is_failed() {
        return Ok(CommandOutput::new(outcome, ""));
    }

    if !page.select_skill(skill_id) {
        return Ok(CommandOutput::new(
            ActionOutcome::Failed,
            format!("Skill '{}' not found in the current listing", skill_id),
        ));
    }

    let outcome = page.send_trade_request().await;
    Ok(CommandOutput::new(outcome, ""))
}

pub async fn skills_add(env: &Env, draft: NewSkillDraft) -> anyhow::Result<CommandOutput> {
    let mut page = env.page();
    page.open_add_skill();
    page.set_draft(draft);

    let outcome = page.submit_new_skill().await;
    let text = match outcome {
        ActionOutcome::Skipped => "Skill name and category are required".to_string(),
        ActionOutcome::Completed => format!("{} skills listed", page.skills().len()),
        ActionOutcome::Failed => String::new(),
    };
    Ok(CommandOutput::new(outcome, text))
}

// ============================================================================
// session
// ============================================================================

/// 토큰과 사용자 JSON 파일로 세션 저장
pub fn session_set(store: &SessionStore, token: &str, user_file: &Path) -> anyhow::Result<CommandOutput> {
    let content = std::fs::read_to_string(user_file)
        .with_context(|| format!("Failed to read {}", user_file.display()))?;
    let user: StoredUser = serde_json::from_str(&content)
        .with_context(|| format!("Invalid user record in {}", user_file.display()))?;

    let name = user.name.clone();
    store.save(&SessionContext::new(token, user))?;
    Ok(CommandOutput::new(
        ActionOutcome::Completed,
        format!("Session saved for {}", name),
    ))
}

pub fn session_show(store: &SessionStore) -> anyhow::Result<CommandOutput> {
    let session = store.load()?;

    let text = match (&session.user, session.token()) {
        (Some(user), Some(_)) => format!("Logged in as {} ({})", user.name, user.id),
        (Some(user), None) => format!("User {} stored without a token", user.name),
        (None, Some(_)) => "Token stored without a user record".to_string(),
        (None, None) => "Not logged in".to_string(),
    };
    Ok(CommandOutput::new(ActionOutcome::Completed, text))
}

pub fn session_clear(store: &SessionStore) -> anyhow::Result<CommandOutput> {
    let text = if store.clear()? {
        "Session cleared"
    } else {
        "No stored session"
    };
    Ok(CommandOutput::new(ActionOutcome::Completed, text))
}

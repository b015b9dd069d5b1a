//! 터미널 알림 출력

use crate::render;
use barter_foundation::{Notification, Notifier, TracingNotifier};
use std::sync::Arc;

/// 알림을 stderr에 출력
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", render::notification(&notification));
    }
}

/// 설정에 따라 화면 출력 또는 로그로만 남김
pub fn for_display(show_notifications: bool) -> Arc<dyn Notifier> {
    if show_notifications {
        Arc::new(ConsoleNotifier)
    } else {
        Arc::new(TracingNotifier)
    }
}

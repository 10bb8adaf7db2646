//! 测试辅助模块
//!
//! 提供测试用的 App 工厂方法和常用操作。

use std::sync::Arc;
use std::time::Duration;

use konsult_core::contact::{ContactSubmitter, SimulatedSubmitter, SubmissionOutcome};
use konsult_core::{Language, Route, SiteConfig};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::SubmitService;
use crate::message::{AppMessage, ContactMessage, NavigationMessage};
use crate::model::{App, FocusPanel};
use crate::update::update;

/// 英文界面、零延迟模拟提交
pub fn test_config() -> SiteConfig {
    SiteConfig {
        default_language: Language::En,
        simulated_delay_ms: 0,
        ..SiteConfig::default()
    }
}

/// 创建宽屏 App（需要在 tokio 运行时中调用）
pub fn test_app() -> (App, UnboundedReceiver<SubmissionOutcome>) {
    test_app_with(test_config())
}

pub fn test_app_with(config: SiteConfig) -> (App, UnboundedReceiver<SubmissionOutcome>) {
    let submitter: Arc<dyn ContactSubmitter> = Arc::new(SimulatedSubmitter::new(
        Duration::from_millis(config.simulated_delay_ms),
    ));
    let (submit, rx) = SubmitService::new(Handle::current(), submitter, config.submit_timeout());
    let mut app = App::new(config, submit);
    app.set_width(120);
    (app, rx)
}

/// 通过导航栏打开某个页面
pub fn visit(app: &mut App, route: Route) {
    app.nav_cursor.select_route(route);
    update(app, AppMessage::Navigation(NavigationMessage::Confirm));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        update(app, AppMessage::Contact(ContactMessage::Input(ch)));
    }
}

fn next_field(app: &mut App) {
    update(app, AppMessage::Contact(ContactMessage::NextField));
}

/// 在刚挂载的联系表单中逐字输入（跳过 Company）
pub fn fill_contact_form(app: &mut App, name: &str, email: &str, message: &str) {
    app.focus = FocusPanel::Content;
    type_text(app, name);
    next_field(app);
    type_text(app, email);
    next_field(app);
    next_field(app);
    type_text(app, message);
}

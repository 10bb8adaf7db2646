//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     provider: LanguageProvider,                     // 已挂载，视图经 use_language() 读取文本
//!     navigation: NavigationState {
//!         current_path = config.start_path,               // 精确匹配决定高亮
//!         menu_open = false,
//!     },
//!     contact: None,                                  // 仅在 /contact 页面时挂载
//!     status_message = None,                          // 状态栏消息
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     if app.should_quit{ break }                     // 退出时语言作用域已卸载，不再渲染
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     while let Ok(outcome) = outcomes.try_recv() {   // 取回已完成的提交
//!         update(&mut app , Contact(Finished(outcome)))   // 过期的结果在 ContactFlow 中被丢弃
//!     }
//!     update(&mut app , Tick)                         // CAPTCHA 过期检查
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use konsult_core::contact::SubmissionOutcome;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::{AppMessage, ContactMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    mut outcomes: UnboundedReceiver<SubmissionOutcome>,
) -> Result<()> {
    loop {
        // 1. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 收取提交结果
        while let Ok(outcome) = outcomes.try_recv() {
            update::update(app, AppMessage::Contact(ContactMessage::Finished(outcome)));
        }
        update::update(app, AppMessage::Tick);

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}

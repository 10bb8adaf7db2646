//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod contact;            // 联系表单子消息处理
//!         mod content;            // 静态页面子消息处理
//!         mod navigation;         // 导航子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!     使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!     复杂的子消息委托给子模块处理（navigation、content、contact）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 联系表单更新（contact.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ContactMessage::Submit 的处理顺序：
//!
//!         1. 正在发送              → 忽略（按钮处于禁用状态）
//!         2. 原生校验不通过        → 提示并聚焦该字段，提交状态不变
//!         3. ContactFlow::begin_submit()
//!              Suppressed          → 什么也不发生（蜜罐被填写）
//!              CaptchaRequired     → 状态变为 error，焦点移到复选框
//!              InFlight            → 忽略
//!              Dispatched(p)       → SubmitService::dispatch(p)
//!
//!     ContactMessage::Finished(outcome)：
//!         - 表单已卸载            → 丢弃
//!         - ticket 不匹配          → ContactFlow::finish 返回 false，丢弃
//!         - 成功                   → 清空表单、重置 CAPTCHA、焦点回到第一个字段
//!         - 失败 / 超时            → 状态 error，字段保留
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod contact;
mod content;
mod navigation;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            app.provider.unmount();
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Contact(contact_msg) => {
            contact::update(app, contact_msg);
        }

        AppMessage::ToggleMenu => {
            navigation::toggle_menu(app);
        }

        AppMessage::CycleLanguage => {
            navigation::cycle_language(app);
        }

        AppMessage::GoBack => {
            if app.is_menu_open() {
                app.navigation.close_menu();
            } else if app.focus.is_content() {
                app.focus = FocusPanel::Navigation;
            }
            app.clear_status();
        }

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::CloseHelp => {
            app.show_help = false;
        }

        AppMessage::Resize(width) => {
            app.set_width(width);
        }

        AppMessage::Tick => {
            contact::tick(app);
        }

        AppMessage::Noop => {}
    }
}

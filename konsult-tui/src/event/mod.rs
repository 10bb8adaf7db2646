//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/窗口等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width , height)       // 终端大小变化，决定是否进入紧凑模式
//!             其他                                 // 暂不处理
//!
//!             当接收到键盘事件时，按以下优先级判断：
//!                 1. 帮助弹窗打开         只响应 Enter / Esc / ?
//!                 2. 全局快捷键           Ctrl+C、Alt+q、Alt+m、Alt+l、Alt+h
//!                 3. 紧凑菜单展开         ↑↓ 选择，Enter 打开，Esc 收起
//!                 4. 在联系表单中输入     字母键全部作为输入
//!                 5. 焦点位于导航栏       handle_navigation_keys
//!                 6. 焦点位于页面内容     handle_content_keys
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 联系表单键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Tab / ↓         → ContactMessage::NextField
//!         Shift+Tab / ↑   → ContactMessage::PrevField
//!         Enter           → ContactMessage::Activate
//!                             （输入框：下一个控件；复选框：勾选；按钮：提交）
//!         Space           → 复选框和按钮上等同 Enter
//!         Alt+s           → ContactMessage::Submit
//!         字符输入        → ContactMessage::Input(c)
//!         Backspace       → ContactMessage::Backspace
//!         Esc             → AppMessage::GoBack（焦点回到导航栏）
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod contact;
//!         mod content;
//!         mod navigation;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             ToggleFocus,                        // 切换焦点面板
//!             Navigation(NavigationMessage),      // 导航栏子消息
//!             Content(ContentMessage),            // 静态页面子消息
//!             Contact(ContactMessage),            // 联系表单子消息
//!             ToggleMenu,                         // 紧凑菜单
//!             CycleLanguage,                      // SV ⇄ EN
//!             GoBack, ShowHelp, CloseHelp,
//!             Resize(u16),                        // 终端宽度变化
//!             Tick,                               // 主循环心跳
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     消息不止来自键盘：
//!         - 键盘 / 窗口事件         → event/handler.rs
//!         - 后台提交结果            → app.rs 从 mpsc 通道取出，包装成
//!                                     ContactMessage::Finished(outcome)
//!         - 每轮循环                → AppMessage::Tick
//!
//!     ContactMessage::Finished 携带 SubmissionOutcome，其中的错误类型
//!     不可 Clone，所以 AppMessage 只派生 Debug。
//!
//!
//! 最后，消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod contact;
mod content;
mod navigation;

pub use app::AppMessage;
pub use contact::ContactMessage;
pub use content::ContentMessage;
pub use navigation::NavigationMessage;

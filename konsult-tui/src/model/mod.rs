//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和简单的状态操作，
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod contact;        // 联系页面（表单 + 焦点 + 校验提示）
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏光标
//!         mod page;           // 静态页面滚动与行动按钮
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub provider: LanguageProvider,     // 语言作用域（use_language 取句柄）
//!             pub navigation: NavigationState,    // 当前路径 + 紧凑菜单
//!             pub nav_cursor: NavCursor,          // 导航栏光标
//!             pub compact: bool,                  // 紧凑模式
//!             pub page: PageState,                // 静态页面状态
//!             pub contact: Option<ContactPage>,   // 联系表单（挂载时为 Some）
//!             pub show_help: bool,                // 帮助弹窗
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub submit: SubmitService,          // 后台提交
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、路由 vs 光标
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     NavigationState（来自 konsult-core）记录当前路径，
//!     导航高亮只看路径是否完全相等。
//!
//!     NavCursor 只是键盘光标：停在哪个链接上不代表打开了哪个页面，
//!     按 Enter 才会跳转。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、联系表单的挂载
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     进入 /contact 时 App::sync_contact_mount() 创建 ContactPage，
//!     每次挂载分配新的 mount id；离开时整个 ContactPage 被丢弃。
//!
//!     已经发出的提交仍在后台运行，结果带着旧的 ticket 回来，
//!     新表单不认这个 ticket，于是结果被忽略。
//!

mod app;
mod contact;
mod focus;
mod navigation;
mod page;

pub use app::App;
pub use contact::{ContactFocus, ContactPage};
pub use focus::FocusPanel;
pub use navigation::{NavCursor, NavTarget};
pub use page::{actions, PageState};

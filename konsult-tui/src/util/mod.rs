//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!     - 终端的初始化和恢复（terminal.rs）
//!     - 文件日志（logging.rs）
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // tracing 文件日志
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logging::init_logging;
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显：按键不会显示在终端上
//!         - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 应用在备用屏幕运行，退出后恢复主屏幕内容
//!
//!     · 日志
//!         stdout 属于终端界面，任何 println! 都会破坏画面。
//!         因此日志一律写入文件，由 init_logging() 返回的 WorkerGuard
//!         在 main() 结束时刷新。
//!
//!         tail -f ~/.local/share/konsult/konsult.log
//!
//!
//! 注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal()！
//!       否则终端会保持在原始模式，用户输入不会正常显示。
//!     —— 去往 src/app.rs 主循环吧
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};

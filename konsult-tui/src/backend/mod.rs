//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，负责与外部世界打交道：
//! 配置文件与表单提交。真正的业务规则在 konsult-core 中。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置加载（JSON 文件）
//!         mod submit_service;     // 联系表单后台提交
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（FileConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     配置文件位置：
//!         - 环境变量 KONSULT_CONFIG 指定的路径
//!         - 否则 $XDG_CONFIG_HOME/konsult/config.json（dirs::config_dir()）
//!
//!     文件不存在时使用默认值；文件无法解析时返回 CoreError::Config。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、提交服务（SubmitService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环是同步的，提交是异步的：
//!
//!         update 层                SubmitService               主循环
//!         ─────────                ─────────────               ──────
//!         begin_submit()
//!             │ Dispatched(p)
//!             ▼
//!         dispatch(p) ──────▶ handle.spawn(p.run(..))
//!                                     │
//!                                     ▼ SubmissionOutcome
//!                              tx.send(outcome) ─────────▶ rx.try_recv()
//!                                                               │
//!                                                               ▼
//!                                              ContactMessage::Finished(outcome)
//!
//!     结果回到 update 层时，如果联系表单已卸载（离开了 Contact 页面），
//!     或已重新挂载为新的表单，结果会被忽略。
//!

mod config_service;
mod submit_service;

pub use config_service::{ConfigService, FileConfigService};
pub use submit_service::SubmitService;

//! IT Konsult 终端站点
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与提交服务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志，guard 存活到退出
//!     ConfigService::load()   // 读取 config.json（不存在时使用默认值）
//!     Runtime::new()          // 提交在 tokio 运行时上执行，不阻塞 UI
//!     build_submitter()       // 有 submit_endpoint 时走 HTTP，否则模拟
//!     init_terminal()
//!     model::App::new()
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 配置文件路径：
//!     `$KONSULT_CONFIG`，否则 `<config_dir>/konsult/config.json`

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use anyhow::Result;
use konsult_core::contact::build_submitter;

use backend::{ConfigService, FileConfigService, SubmitService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志
    let _guard = init_logging()?;

    // 2. 配置
    let config_service = FileConfigService::from_env();
    tracing::info!(path = %config_service.path().display(), "Loading config");
    let config = config_service.load()?;

    // 3. 提交服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let submitter = build_submitter(&config)?;
    let (submit, outcomes) =
        SubmitService::new(runtime.handle().clone(), submitter, config.submit_timeout());

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(config, submit);
    app.set_width(terminal.size()?.width);

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, outcomes);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Shutting down");
    result
}

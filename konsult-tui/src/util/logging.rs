//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入文件：
//!     `$XDG_DATA_HOME/konsult/konsult.log`（或平台对应目录）
//!
//! 级别由 `RUST_LOG` 控制，默认 `info`。
//! `konsult-core` 通过 `log` 门面输出，由 tracing-subscriber 桥接。

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
const LOG_FILE: &str = "konsult.log";

/// 日志目录
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("konsult")
}

/// 安装文件日志订阅者
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()?;

    Ok(guard)
}

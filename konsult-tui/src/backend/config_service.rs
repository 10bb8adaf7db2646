//! 配置服务

use std::ffi::OsString;
use std::path::PathBuf;

use konsult_core::{CoreResult, SiteConfig};

/// 覆盖配置文件路径的环境变量
pub const CONFIG_ENV: &str = "KONSULT_CONFIG";

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> CoreResult<SiteConfig>;
}

/// 本地 JSON 配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用 `KONSULT_CONFIG` 或默认配置目录
    pub fn from_env() -> Self {
        Self::new(resolve_config_path(std::env::var_os(CONFIG_ENV)))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> CoreResult<SiteConfig> {
        SiteConfig::load(&self.path)
    }
}

/// 获取配置目录路径
fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("konsult")
}

/// 环境变量优先，其次为 `<config_dir>/konsult/config.json`
fn resolve_config_path(override_path: Option<OsString>) -> PathBuf {
    match override_path {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config_dir().join("config.json"),
    }
}

//! 服务配置
//!
//! 与站点内容（[`crate::site::SiteConfig`]）分离：这里只描述进程如何运行，
//! 包括监听地址、日志、部署路径以及结账模拟延迟。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 部署配置
    pub deployment: DeploymentConfig,
    /// 结账配置
    pub checkout: CheckoutConfig,
    /// 盒子会话配置
    pub sessions: SessionConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志目录
    pub log_dir: PathBuf,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 部署配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    /// 资源路径前缀，例如 GitHub Pages 下的 `/cmaa-foods`
    pub base_path: String,
    /// 静态资源目录
    pub assets_dir: PathBuf,
    /// 站点内容文件，缺省时使用内置内容
    pub site_config: Option<PathBuf>,
}

/// 结账配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// 模拟提交延迟（毫秒）
    pub submit_delay_ms: u64,
}

/// 盒子会话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// 同时保留的会话上限，超出时淘汰最久未使用的
    pub max_sessions: usize,
    /// 闲置过期时间（分钟）
    pub idle_ttl_minutes: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./logs"),
            file_prefix: "storefront".to_string(),
            console_output: true,
            level: "info".to_string(),
        }
    }
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            assets_dir: PathBuf::from("./public"),
            site_config: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            idle_ttl_minutes: 120,
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
        }
    }
}

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// GitHub Pages 未提供仓库名时的默认前缀
const DEFAULT_PAGES_BASE_PATH: &str = "/cmaa-foods";

impl AppConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }

        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, VALID_LEVELS
            )));
        }

        if self.sessions.max_sessions == 0 {
            return Err(ConfigError::Validation("会话上限必须大于0".to_string()));
        }
        if self.sessions.idle_ttl_minutes == 0 {
            return Err(ConfigError::Validation("会话过期时间必须大于0".to_string()));
        }

        let base = &self.deployment.base_path;
        if !base.is_empty() && (!base.starts_with('/') || base.ends_with('/')) {
            return Err(ConfigError::Validation(format!(
                "无效的资源路径前缀: {}，必须以 / 开头且不能以 / 结尾",
                base
            )));
        }

        Ok(())
    }

    /// 用环境变量覆盖配置
    ///
    /// `lookup` 抽象了环境读取，测试中可以传入固定映射。
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("STOREFRONT_PORT").and_then(|p| p.parse().ok()) {
            self.http.port = port;
        }
        if let Some(level) = lookup("STOREFRONT_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Some(base) = resolve_base_path(&lookup) {
            self.deployment.base_path = base;
        }
    }
}

/// 根据部署环境推导资源路径前缀
///
/// 显式的 `STOREFRONT_BASE_PATH` 优先；否则仅在 `GITHUB_PAGES=true` 时
/// 依次尝试 `GITHUB_REPOSITORY` 的仓库名、`BASE_PATH`、默认前缀。
pub fn resolve_base_path<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(explicit) = lookup("STOREFRONT_BASE_PATH") {
        return Some(explicit.trim_end_matches('/').to_string());
    }

    if lookup("GITHUB_PAGES").as_deref() != Some("true") {
        return None;
    }

    let from_repo = lookup("GITHUB_REPOSITORY")
        .and_then(|repo| repo.split('/').nth(1).map(str::to_string))
        .filter(|name| !name.is_empty())
        .map(|name| format!("/{}", name));

    Some(
        from_repo
            .or_else(|| lookup("BASE_PATH"))
            .unwrap_or_else(|| DEFAULT_PAGES_BASE_PATH.to_string()),
    )
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置，并应用环境变量覆盖
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config_paths = ["config.toml", "./config/app.toml"];

    let mut config = match config_paths.iter().find(|p| Path::new(p).exists()) {
        Some(path) => {
            println!("从配置文件加载: {}", path);
            AppConfig::load_from_file(path)?
        }
        None => {
            println!("未找到配置文件，使用默认配置");
            AppConfig::default()
        }
    };

    config.apply_env(|key| std::env::var(key).ok());
    config.validate()?;
    Ok(config)
}

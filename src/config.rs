/// 应用配置管理
use crate::tracker::TrackerOptions;
use crate::view::RegionIds;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 错误提示显示时长（毫秒）
    pub error_timeout_ms: u64,
    /// 是否转义任务文本中的 HTML
    pub escape_html: bool,
    /// 日志文件
    pub log_file: PathBuf,
    /// 空输入时显示的提示
    pub error_message: String,
    /// 界面区域标识
    pub regions: RegionIds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_timeout_ms: 2000,
            escape_html: false,
            log_file: std::env::temp_dir().join("task_tracker.log"),
            error_message: "任务内容不能为空".to_string(),
            regions: RegionIds::default(),
        }
    }
}

impl Config {
    pub fn tracker_options(&self) -> TrackerOptions {
        TrackerOptions {
            error_timeout: Duration::from_millis(self.error_timeout_ms),
            escape_html: self.escape_html,
        }
    }
}

/// 获取配置文件路径
/// Windows: %APPDATA%\task-tracker\config.toml
/// macOS: ~/Library/Application Support/task-tracker/config.toml
/// Linux: ~/.config/task-tracker/config.toml
pub fn get_config_path() -> Result<PathBuf> {
    let dirs = directories::BaseDirs::new().context("无法获取用户目录")?;
    Ok(dirs.config_dir().join("task-tracker").join("config.toml"))
}

/// 加载配置，文件不存在时返回默认值
pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("配置文件格式错误: {}", path.display()))?;

    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(config, &get_config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> Result<()> {
    // 确保目录存在
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;

    Ok(())
}

/// 更新错误提示时长
pub fn set_error_timeout(ms: u64) -> Result<()> {
    let mut config = load_config()?;
    config.error_timeout_ms = ms;
    save_config(&config)?;
    println!("✓ 错误提示时长已设置为: {} ms", config.error_timeout_ms);
    Ok(())
}

/// 更新 HTML 转义开关
pub fn set_escape_html(enabled: bool) -> Result<()> {
    let mut config = load_config()?;
    config.escape_html = enabled;
    save_config(&config)?;
    println!(
        "✓ HTML 转义已{}",
        if config.escape_html { "开启" } else { "关闭" }
    );
    Ok(())
}

/// 显示当前配置
pub fn show_config() -> Result<()> {
    let config = load_config()?;
    println!("当前配置:");
    println!("  错误提示时长: {} ms", config.error_timeout_ms);
    println!("  HTML 转义:    {}", config.escape_html);
    println!("  日志文件:     {}", config.log_file.display());
    println!("  区域标识:");
    println!("    search       = {}", config.regions.search);
    println!("    error        = {}", config.regions.error);
    println!("    pinned_tasks = {}", config.regions.pinned_tasks);
    println!("    all_tasks    = {}", config.regions.all_tasks);
    println!("    no_pinned    = {}", config.regions.no_pinned);
    println!("    no_tasks     = {}", config.regions.no_tasks);
    println!();
    println!("配置文件: {}", get_config_path()?.display());
    Ok(())
}

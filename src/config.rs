//! 配置加载 (~/.config/testgrounds/config.toml)
//!
//! 文件不存在时使用默认值，界面状态本身从不落盘

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::EmptySegments;
use crate::theme::{MAX_DEBOUNCE, MIN_DEBOUNCE};

pub const APP_DIR: &str = "testgrounds";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 主题切换防抖窗口（毫秒）
    pub debounce_ms: u64,
    /// 连续空格产生的空单词是否保留
    pub empty_tokens: EmptySegments,
    /// 默认日志级别，可被 TESTGROUNDS_LOG 覆盖
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: MAX_DEBOUNCE.as_millis() as u64,
            empty_tokens: EmptySegments::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 钳制到允许的窗口范围
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms).clamp(MIN_DEBOUNCE, MAX_DEBOUNCE)
    }

    pub fn debounce_was_clamped(&self) -> bool {
        Duration::from_millis(self.debounce_ms) != self.debounce_window()
    }
}

/// 配置文件路径
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// 从 TOML 文件加载配置
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

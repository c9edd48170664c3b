//! 游戏配置
//!
//! JSON 持久化，默认位于 `<config_dir>/hoppers/config.json`。

use std::path::{Path, PathBuf};

use hoppers_ai::AiConfig;
use hoppers_core::Side;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// 配置读写错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("无法获取配置目录")]
    NoConfigDir,

    #[error("读写配置文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件格式无效: {0}")]
    Format(#[from] serde_json::Error),
}

/// 游戏配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// AI 设置
    pub ai: AiConfig,
    /// 人类玩家执哪一方
    pub human_side: Side,
    /// 自我对弈的最大手数
    pub max_turns: u32,
    /// 是否打印每步的完整路径
    pub show_paths: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            human_side: Side::A,
            max_turns: 200,
            show_paths: true,
        }
    }
}

impl GameConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("hoppers");
            path.push("config.json");
            path
        })
    }

    /// 加载配置
    ///
    /// 优先使用 `path`，否则使用默认路径；文件缺失或无效时回退到默认配置。
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    warn!("无法获取配置目录，使用默认配置");
                    return Self::default();
                }
            },
        };

        if !path.exists() {
            info!("配置文件不存在，使用默认配置");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                info!("已加载配置: {:?}", path);
                config
            }
            Err(e) => {
                warn!("{}，使用默认配置", e);
                Self::default()
            }
        }
    }

    /// 从指定文件读取配置
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 保存到默认路径
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// 保存到指定文件
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        info!("配置已保存: {:?}", path);
        Ok(())
    }
}

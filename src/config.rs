use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub draw: DrawConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 抽奖策略配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DrawConfig {
    /// true: 抽奖请求的非法权重直接拒绝 (InvalidWeights)，
    /// 面向编辑器预览的部署使用。
    /// false (默认): 防御性自动归一，面向玩家的部署使用——权重错误
    /// 是保存时的问题，不应让玩家侧抽奖失败。
    #[serde(default)]
    pub strict_weights: bool,
}

impl Config {
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 配置文件可选: 不存在时完全依赖环境变量与默认值
        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => toml::from_str(&config_str)
                .map_err(|e| AppError::ConfigError(format!("解析配置文件失败: {e}")))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Config {
                server: ServerConfig {
                    host: "0.0.0.0".to_string(),
                    port: 8080,
                },
                draw: DrawConfig::default(),
            },
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "无法读取配置文件 {config_path}: {e}"
                )));
            }
        };

        // 环境变量覆盖（即便文件存在时也覆盖）
        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("DRAW_STRICT_WEIGHTS")
            && let Ok(b) = v.parse()
        {
            config.draw.strict_weights = b;
        }

        Ok(config)
    }
}

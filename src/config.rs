//! 启动配置
//!
//! 读取优先级：
//! 1. 进程环境变量
//! 2. dotenv 文件（默认 `.env`，不存在时忽略；读取时不修改进程环境）
//!
//! 任一必需变量缺失或为空都是致命错误。

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// 必需的三个配置项
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// 作业 API token
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// 接收通知的 chat
    pub telegram_chat_id: String,
}

// token 不进日志
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

impl Config {
    /// 通过查找函数构建配置，缺失的变量全部列出
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut get = |key: &'static str| {
            let value = lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            if value.is_none() {
                missing.push(key);
            }
            value.unwrap_or_default()
        };

        let practicum_token = get(PRACTICUM_TOKEN);
        let telegram_token = get(TELEGRAM_TOKEN);
        let telegram_chat_id = get(TELEGRAM_CHAT_ID);

        if !missing.is_empty() {
            return Err(ConfigError::Missing { names: missing });
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }

    /// 从进程环境和 dotenv 文件加载
    pub fn load(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(env_file, |key| std::env::var(key).ok())
    }

    /// 同 `load`，环境变量通过 `env` 查找；非空的环境值优先于文件
    pub fn load_with<E>(env_file: Option<&Path>, env: E) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let file_vars = match env_file {
            Some(path) if path.exists() => read_env_file(path)?,
            Some(path) => {
                debug!(path = %path.display(), "Env file not found, using process environment only");
                HashMap::new()
            }
            None => HashMap::new(),
        };

        Self::from_lookup(|key| {
            env(key)
                .filter(|v| !v.is_empty())
                .or_else(|| file_vars.get(key).cloned())
        })
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_error = |e: dotenvy::Error| ConfigError::EnvFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path).map_err(to_error)? {
        let (key, value) = item.map_err(to_error)?;
        vars.insert(key, value);
    }

    debug!(path = %path.display(), count = vars.len(), "Loaded env file");
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_all_present() {
        let config = Config::from_lookup(lookup_from(&[
            (PRACTICUM_TOKEN, "p"),
            (TELEGRAM_TOKEN, "t"),
            (TELEGRAM_CHAT_ID, "42"),
        ]))
        .unwrap();

        assert_eq!(config.practicum_token, "p");
        assert_eq!(config.telegram_token, "t");
        assert_eq!(config.telegram_chat_id, "42");
    }

    #[test]
    fn test_empty_value_is_missing() {
        let err = Config::from_lookup(lookup_from(&[
            (PRACTICUM_TOKEN, "p"),
            (TELEGRAM_TOKEN, "t"),
            (TELEGRAM_CHAT_ID, "  "),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::Missing { names: vec![TELEGRAM_CHAT_ID] });
    }

    #[test]
    fn test_reports_every_missing_name() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing {
                names: vec![PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID]
            }
        );
    }

    #[test]
    fn test_debug_hides_tokens() {
        let config = Config::from_lookup(lookup_from(&[
            (PRACTICUM_TOKEN, "secret-p"),
            (TELEGRAM_TOKEN, "secret-t"),
            (TELEGRAM_CHAT_ID, "42"),
        ]))
        .unwrap();

        let text = format!("{:?}", config);
        assert!(!text.contains("secret"));
        assert!(text.contains("42"));
    }
}

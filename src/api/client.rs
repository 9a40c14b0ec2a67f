//! Practicum 作业 API 客户端
//!
//! 每次调用只发一个同步请求，不在内部重试；重试由轮询循环的间隔负责。

use anyhow::{anyhow, Result};
use serde_json::Value;
use tracing::debug;

use super::types::Cursor;
use crate::error::TransportError;

/// 作业状态接口
pub const PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// 作业数据来源
///
/// 返回未经校验的原始响应，外层结构由 `api::validator` 检查。
pub trait SubmissionSource {
    fn fetch(&self, since: Cursor) -> Result<Value, TransportError>;
}

/// 客户端配置
#[derive(Debug, Clone)]
pub struct PracticumConfig {
    /// OAuth token
    pub token: String,
    /// 接口地址
    pub endpoint: String,
}

impl PracticumConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            endpoint: PRACTICUM_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Practicum API 客户端
pub struct PracticumClient {
    client: reqwest::blocking::Client,
    config: PracticumConfig,
}

impl PracticumClient {
    /// 创建新客户端，超时沿用 reqwest 默认值
    pub fn new(config: PracticumConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| anyhow!("Cannot create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    fn auth_header(&self) -> String {
        format!("OAuth {}", self.config.token)
    }
}

impl SubmissionSource for PracticumClient {
    fn fetch(&self, since: Cursor) -> Result<Value, TransportError> {
        let since = since.or_now();

        debug!(
            endpoint = %self.config.endpoint,
            from_date = %since,
            "Requesting homework statuses"
        );

        let response = self
            .client
            .get(&self.config.endpoint)
            .header("Authorization", self.auth_header())
            .query(&[("from_date", since.0)])
            .send()
            .map_err(|e| TransportError::Connection {
                reason: e.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                endpoint: self.config.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| TransportError::Body {
                reason: e.without_url().to_string(),
            })?;

        serde_json::from_str(&body).map_err(|e| TransportError::Body { reason: e.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_practicum() {
        let config = PracticumConfig::new("token");
        assert_eq!(config.endpoint, PRACTICUM_ENDPOINT);
        assert_eq!(config.token, "token");
    }

    #[test]
    fn test_auth_header_uses_oauth_scheme() {
        let client = PracticumClient::new(PracticumConfig::new("secret")).unwrap();
        assert_eq!(client.auth_header(), "OAuth secret");
    }

    #[test]
    fn test_unreachable_endpoint_is_connection_error() {
        // 端口 9 (discard) 上没有 HTTP 服务
        let config = PracticumConfig::new("t").with_endpoint("http://127.0.0.1:9/");
        let client = PracticumClient::new(config).unwrap();

        let err = client.fetch(Cursor(1)).unwrap_err();
        assert!(matches!(err, TransportError::Connection { .. }));
    }

    #[test]
    fn test_connection_error_text_is_stable() {
        let config = PracticumConfig::new("t").with_endpoint("http://127.0.0.1:9/");
        let client = PracticumClient::new(config).unwrap();

        let first = client.fetch(Cursor(0)).unwrap_err();
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let second = client.fetch(Cursor(0)).unwrap_err();

        // 故障通知按文本去重，文本里不能带请求 URL 和 from_date
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
        assert!(!first.to_string().contains("from_date"));
        assert!(!first.to_string().contains("127.0.0.1"));
    }
}

//! Telegram 渠道（Bot API sendMessage）

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DeliveryError;
use crate::notification::channel::NotificationChannel;

/// Bot API 基础地址
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Telegram 渠道配置
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token
    pub bot_token: String,
    /// Chat ID
    pub chat_id: String,
    /// Bot API 地址（测试或代理时替换）
    pub api_url: String,
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            api_url: TELEGRAM_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram 渠道
pub struct TelegramChannel {
    client: reqwest::blocking::Client,
    config: TelegramConfig,
}

impl TelegramChannel {
    pub fn new(config: TelegramConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| anyhow!("Cannot create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_url.trim_end_matches('/'),
            self.config.bot_token
        )
    }

    fn deliver(&self, message: &str) -> Result<(), DeliveryError> {
        let payload = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text: message,
        };

        let response = self
            .client
            .post(self.send_message_url())
            .json(&payload)
            .send()
            .map_err(|e| DeliveryError::new(e.without_url().to_string()))?;

        let status = response.status();
        let body: SendMessageResponse = response
            .json()
            .map_err(|e| DeliveryError::new(format!("HTTP {}: {}", status, e.without_url())))?;

        if status.is_success() && body.ok {
            Ok(())
        } else {
            Err(DeliveryError::new(format!(
                "HTTP {}: {}",
                status,
                body.description.unwrap_or_else(|| "Unknown error".to_string())
            )))
        }
    }
}

impl NotificationChannel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    /// 失败只返回错误，由调用方记录日志
    fn send(&self, message: &str) -> Result<(), DeliveryError> {
        self.deliver(message)?;
        info!(
            chat_id = %self.config.chat_id,
            message = %message,
            "Message sent successfully"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_url() {
        let mut config = TelegramConfig::new("123:abc", "42");
        config.api_url = "http://localhost:8081/".to_string();
        let channel = TelegramChannel::new(config).unwrap();

        assert_eq!(channel.send_message_url(), "http://localhost:8081/bot123:abc/sendMessage");
    }

    #[test]
    fn test_request_body() {
        let body = serde_json::to_value(SendMessageRequest {
            chat_id: "42",
            text: "hello",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"chat_id": "42", "text": "hello"}));
    }

    #[test]
    fn test_unreachable_api_is_delivery_error() {
        let mut config = TelegramConfig::new("secret-token", "42");
        config.api_url = "http://127.0.0.1:9".to_string();
        let channel = TelegramChannel::new(config).unwrap();

        let err = channel.send("hello").unwrap_err();
        // token 不应出现在错误文本里
        assert!(!err.to_string().contains("secret-token"));
    }
}

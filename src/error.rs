//! 错误类型
//!
//! 每个周期内的错误都是封闭的枚举，在轮询循环边界处显式匹配。
//! `Display` 文本会原样进入 Telegram 的故障通知，所以使用俄语。

use thiserror::Error;

/// 请求作业 API 失败（网络、HTTP 状态码或响应体解析）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Ошибка при запросе к API: {reason}")]
    Connection { reason: String },

    #[error("Эндпоинт {endpoint} недоступен, код ответа {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Ответ API не является корректным JSON: {reason}")]
    Body { reason: String },
}

/// API 响应外层结构不符合预期
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Ответ API не является словарём")]
    NotAMapping,

    #[error("В ответе API отсутствует ключ \"{key}\"")]
    MissingKey { key: &'static str },

    #[error("Ключ \"homeworks\" в ответе API не является списком")]
    SubmissionsNotAList,

    #[error("Ключ \"current_date\" в ответе API не является меткой времени")]
    CursorNotATimestamp,
}

/// 单条作业记录无法生成通知
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("В данных о работе отсутствует ключ \"{key}\"")]
    MissingField { key: &'static str },

    #[error("Неизвестный статус {status} работы {name}")]
    UnknownStatus { name: String, status: String },
}

/// 聊天渠道投递失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Сообщение не отправлено: {reason}")]
pub struct DeliveryError {
    pub reason: String,
}

impl DeliveryError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// 一个周期在发送之前的失败，统一走故障通知路径
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CycleError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// 启动配置缺失，唯一的致命错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .names.join(", "))]
    Missing { names: Vec<&'static str> },

    #[error("Cannot read env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

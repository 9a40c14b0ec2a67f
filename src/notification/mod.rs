//! 通知层：文本生成、去重快照与发送渠道
//!
//! # 使用示例
//! ```ignore
//! use homework_notifier::notification::{compose, NotificationChannel, TelegramChannel, TelegramConfig};
//!
//! let channel = TelegramChannel::new(TelegramConfig::new(token, chat_id))?;
//! let message = compose(&submission)?;
//! channel.send(&message)?;
//! ```

pub mod channel;
pub mod channels;
pub mod composer;
pub mod report;

pub use channel::NotificationChannel;
pub use channels::{TelegramChannel, TelegramConfig};
pub use composer::{compose, compose_failure};
pub use report::Report;

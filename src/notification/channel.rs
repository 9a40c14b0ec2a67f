//! 通知渠道 trait 定义

use crate::error::DeliveryError;

/// 通知渠道
///
/// 只有一个目标；失败不在内部重试。
pub trait NotificationChannel {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 同步发送消息
    fn send(&self, message: &str) -> Result<(), DeliveryError>;
}

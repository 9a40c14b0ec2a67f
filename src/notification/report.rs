//! 上一次（或本次候选）通知的内容快照，用于去重

/// 通知内容快照
///
/// 两个 `Report` 相等即视为重复，不再发送。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Report {
    /// 作业名称；故障通知为空
    pub submission_name: String,
    /// 完整通知文本
    pub message: String,
}

impl Report {
    pub fn new(submission_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            submission_name: submission_name.into(),
            message: message.into(),
        }
    }

    /// 故障通知
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(String::new(), message)
    }

    /// 启动时的空值，不会与任何真实通知相等
    pub fn is_empty(&self) -> bool {
        self.submission_name.is_empty() && self.message.is_empty()
    }
}

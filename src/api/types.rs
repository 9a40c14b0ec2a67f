//! 作业 API 数据类型

use serde_json::Value;

/// 一条作业记录（只读，来自 API）
///
/// 字段保留原始 JSON：外层校验不检查单条记录。
/// `None` 表示键不存在，存在但类型不对的值由 composer 报告。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    /// 作业名称
    pub homework_name: Option<Value>,
    /// 状态码（approved / reviewing / rejected / ...）
    pub status: Option<Value>,
}

impl Submission {
    pub fn new(homework_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(Value::String(homework_name.into())),
            status: Some(Value::String(status.into())),
        }
    }

    /// 从原始 JSON 读取
    pub fn from_value(value: &Value) -> Self {
        Self {
            homework_name: value.get("homework_name").cloned(),
            status: value.get("status").cloned(),
        }
    }

    /// 作业名称的文本形式
    pub fn name(&self) -> Option<String> {
        self.homework_name.as_ref().map(render)
    }
}

/// 字符串原样返回，其他值按 JSON 输出（`5`、`null`）
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 下一次请求的时间下界（Unix 秒）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(pub i64);

impl Cursor {
    /// 当前时间
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp())
    }

    /// 0 表示未设置，按 "现在" 处理
    pub fn or_now(self) -> Self {
        if self.0 == 0 {
            Self::now()
        } else {
            self
        }
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 一次成功请求并通过校验的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    /// 作业列表，最新的在前
    pub submissions: Vec<Submission>,
    /// 下一次请求使用的 cursor
    pub cursor: Cursor,
}

impl FetchResult {
    /// 最新一条作业
    pub fn latest(&self) -> Option<&Submission> {
        self.submissions.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_from_value() {
        let sub = Submission::from_value(&json!({
            "homework_name": "proj1",
            "status": "approved",
            "reviewer_comment": "ok"
        }));
        assert_eq!(sub, Submission::new("proj1", "approved"));
    }

    #[test]
    fn test_submission_keeps_presence() {
        let sub = Submission::from_value(&json!({"homework_name": 42, "status": null}));
        assert_eq!(sub.homework_name, Some(json!(42)));
        assert_eq!(sub.status, Some(Value::Null));
        assert_eq!(sub.name().as_deref(), Some("42"));

        let sub = Submission::from_value(&json!({}));
        assert_eq!(sub, Submission::default());

        let sub = Submission::from_value(&json!("not an object"));
        assert_eq!(sub, Submission::default());
    }

    #[test]
    fn test_zero_cursor_means_now() {
        let before = chrono::Utc::now().timestamp();
        let cursor = Cursor(0).or_now();
        assert!(cursor.0 >= before);

        assert_eq!(Cursor(1_700_000_000).or_now(), Cursor(1_700_000_000));
    }

    #[test]
    fn test_latest_is_first() {
        let result = FetchResult {
            submissions: vec![Submission::new("new", "reviewing"), Submission::new("old", "approved")],
            cursor: Cursor(1),
        };
        assert_eq!(result.latest().and_then(|s| s.name()).as_deref(), Some("new"));
        assert!(FetchResult::default().latest().is_none());
    }
}

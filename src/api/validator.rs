//! 响应外层结构校验
//!
//! 只检查信封：必须是对象，`homeworks` 为列表，`current_date` 为时间戳。
//! 单条作业的内容交给 composer 处理。

use serde_json::Value;

use super::types::{Cursor, FetchResult, Submission};
use crate::error::ShapeError;

pub const SUBMISSIONS_KEY: &str = "homeworks";
pub const CURSOR_KEY: &str = "current_date";

/// 校验原始响应并拆出作业列表和 cursor
pub fn validate(raw: &Value) -> Result<FetchResult, ShapeError> {
    let body = raw.as_object().ok_or(ShapeError::NotAMapping)?;

    let submissions = body
        .get(SUBMISSIONS_KEY)
        .ok_or(ShapeError::MissingKey { key: SUBMISSIONS_KEY })?
        .as_array()
        .ok_or(ShapeError::SubmissionsNotAList)?;

    let cursor = body
        .get(CURSOR_KEY)
        .ok_or(ShapeError::MissingKey { key: CURSOR_KEY })?
        .as_i64()
        .ok_or(ShapeError::CursorNotATimestamp)?;

    Ok(FetchResult {
        submissions: submissions.iter().map(Submission::from_value).collect(),
        cursor: Cursor(cursor),
    })
}

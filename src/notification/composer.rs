//! 通知文本生成

use crate::api::types::render;
use crate::api::Submission;
use crate::error::ComposeError;
use crate::status::ReviewStatus;

/// 为一条作业生成通知文本
///
/// 格式固定：`Изменился статус проверки работы "<name>": <verdict>`
///
/// 键不存在是 `MissingField`；状态存在但不是已知的字符串状态码
/// （包括数字、`null`）是 `UnknownStatus`。
pub fn compose(submission: &Submission) -> Result<String, ComposeError> {
    let name = submission
        .name()
        .ok_or(ComposeError::MissingField { key: "homework_name" })?;
    let code = submission
        .status
        .as_ref()
        .ok_or(ComposeError::MissingField { key: "status" })?;

    let status = code
        .as_str()
        .and_then(ReviewStatus::from_code)
        .ok_or_else(|| ComposeError::UnknownStatus {
            name: name.clone(),
            status: render(code),
        })?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\": {}",
        name,
        status.verdict()
    ))
}

/// 周期失败时的通知文本
pub fn compose_failure(cause: &impl std::fmt::Display) -> String {
    format!("Сбой в работе программы: {}", cause)
}

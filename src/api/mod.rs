//! 作业 API：请求、数据类型与响应校验

pub mod client;
pub mod types;
pub mod validator;

pub use client::{PracticumClient, PracticumConfig, SubmissionSource, PRACTICUM_ENDPOINT};
pub use types::{Cursor, FetchResult, Submission};
pub use validator::validate;

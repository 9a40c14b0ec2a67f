//! Homework Notifier - 作业审阅状态变化的 Telegram 通知

pub mod api;
pub mod config;
pub mod error;
pub mod notification;
pub mod poller;
pub mod status;

pub use api::{Cursor, FetchResult, PracticumClient, PracticumConfig, Submission, SubmissionSource, PRACTICUM_ENDPOINT};
pub use config::Config;
pub use error::{ComposeError, ConfigError, CycleError, DeliveryError, ShapeError, TransportError};
pub use notification::{NotificationChannel, Report, TelegramChannel, TelegramConfig};
pub use poller::{CycleOutcome, PollingLoop, RETRY_INTERVAL};
pub use status::ReviewStatus;

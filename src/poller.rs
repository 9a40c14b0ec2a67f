//! 轮询循环 - 拉取作业状态，去重后发送通知
//!
//! 每个周期：fetch → validate → compose → 与上次已发送内容比较 → send → sleep。
//! 周期内的错误都在这里捕获，转成故障通知并走同样的去重逻辑；
//! 循环本身永不退出。

use std::thread;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::api::{validate, Cursor, SubmissionSource};
use crate::error::CycleError;
use crate::notification::{compose, compose_failure, NotificationChannel, Report};

/// 默认轮询间隔（10 分钟）
pub const RETRY_INTERVAL: Duration = Duration::from_secs(600);

/// 单个周期的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// 没有新的作业状态，不发送
    NoNews,
    /// 内容变化，已发送
    Sent,
    /// 内容与上次已发送的相同，跳过
    Unchanged,
    /// 发送失败，下个周期重试
    DeliveryFailed,
}

/// 轮询循环
///
/// 独占 cursor 和上次已发送的 `Report`，不需要加锁。
pub struct PollingLoop<S, C> {
    source: S,
    channel: C,
    interval: Duration,
    cursor: Cursor,
    previous: Report,
}

impl<S: SubmissionSource, C: NotificationChannel> PollingLoop<S, C> {
    pub fn new(source: S, channel: C, cursor: Cursor) -> Self {
        Self {
            source,
            channel,
            interval: RETRY_INTERVAL,
            cursor: cursor.or_now(),
            previous: Report::default(),
        }
    }

    /// 设置轮询间隔
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// 上次成功发送的内容
    pub fn previous(&self) -> &Report {
        &self.previous
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// 永久运行：每个周期后无条件睡眠
    pub fn run(&mut self) -> ! {
        info!(
            interval_secs = self.interval.as_secs(),
            channel = %self.channel.name(),
            "Polling loop started"
        );

        loop {
            let outcome = self.run_cycle();
            debug!(?outcome, next_in_secs = self.interval.as_secs(), "Cycle finished");
            thread::sleep(self.interval);
        }
    }

    /// 执行一个周期
    pub fn run_cycle(&mut self) -> CycleOutcome {
        info!(from_date = %self.cursor, "Checking homework statuses");

        let current = match self.poll() {
            Ok(Some(report)) => report,
            Ok(None) => {
                info!("No new homework statuses");
                return CycleOutcome::NoNews;
            }
            Err(e) => {
                error!(error = %e, "Cycle failed");
                Report::failure(compose_failure(&e))
            }
        };

        self.dispatch(current)
    }

    /// fetch → validate → compose；列表为空时返回 `None`
    fn poll(&mut self) -> Result<Option<Report>, CycleError> {
        let raw = self.source.fetch(self.cursor)?;
        let result = validate(&raw)?;
        // 0 固定成一个时间点，避免每次请求（及错误文本）都不同
        self.cursor = result.cursor.or_now();

        let Some(submission) = result.latest() else {
            return Ok(None);
        };

        let message = compose(submission)?;
        let name = submission.name().unwrap_or_default();
        Ok(Some(Report::new(name, message)))
    }

    /// 与上次已发送内容比较，不同才发送；只有发送成功才推进 `previous`
    fn dispatch(&mut self, current: Report) -> CycleOutcome {
        if current == self.previous {
            debug!(
                homework = %current.submission_name,
                "Report unchanged, skipping notification"
            );
            return CycleOutcome::Unchanged;
        }

        match self.channel.send(&current.message) {
            Ok(()) => {
                info!(
                    homework = %current.submission_name,
                    channel = %self.channel.name(),
                    "Notification sent"
                );
                self.previous = current;
                CycleOutcome::Sent
            }
            Err(e) => {
                error!(
                    channel = %self.channel.name(),
                    error = %e,
                    "Notification not delivered, will retry next cycle"
                );
                CycleOutcome::DeliveryFailed
            }
        }
    }
}

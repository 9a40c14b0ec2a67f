//! Homework status bot
//!
//! 轮询 Practicum 作业 API，状态变化时通过 Telegram 通知

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use homework_notifier::{
    Config, Cursor, PollingLoop, PracticumClient, PracticumConfig, TelegramChannel,
    TelegramConfig, PRACTICUM_ENDPOINT,
};

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Homework status bot - 作业审阅状态变化时发送 Telegram 通知")]
#[command(version)]
struct Cli {
    /// 轮询间隔（秒）
    #[arg(long, short, default_value = "600")]
    interval: u64,
    /// dotenv 文件路径（不存在时忽略）
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
    /// 日志写入文件而不是 stderr（启动时清空）
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// 作业 API 地址
    #[arg(long, default_value = PRACTICUM_ENDPOINT)]
    endpoint: String,
    /// 只执行一个周期后退出
    #[arg(long)]
    once: bool,
}

/// 初始化 tracing 日志系统
///
/// 通过 RUST_LOG 环境变量控制日志级别，默认为 info
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("homework_notifier=info,homework_bot=info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = match Config::load(Some(cli.env_file.as_path())) {
        Ok(config) => config,
        Err(e) => {
            error!(critical = true, error = %e, "Required configuration unavailable, exiting");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let source = PracticumClient::new(
        PracticumConfig::new(&config.practicum_token).with_endpoint(&cli.endpoint),
    )?;
    let channel = TelegramChannel::new(TelegramConfig::new(
        &config.telegram_token,
        &config.telegram_chat_id,
    ))?;

    let mut poller = PollingLoop::new(source, channel, Cursor::now())
        .with_interval(Duration::from_secs(cli.interval));

    if cli.once {
        let outcome = poller.run_cycle();
        info!(?outcome, "Single cycle finished");
        return Ok(());
    }

    poller.run()
}

//! 日志：终端被界面占用，tracing 输出写入数据目录下的文件

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::Result;

pub const LOG_ENV: &str = "TESTGROUNDS_LOG";
const LOG_FILE: &str = "testgrounds.log";

/// 安装全局订阅者，返回的 guard 必须存活到程序结束
pub fn init(log_dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    Ok(guard)
}

// Logging module: tracing setup. Events go to a log file only; stdout
// belongs to the maze.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "pathbot.log";

/// Install the global subscriber writing to `<log_dir>/pathbot.log`.
///
/// `RUST_LOG` overrides the default `info` level. The returned guard flushes
/// the writer on drop and must live until the session ends.
pub fn setup_logging(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Log file: {}", log_file(log_dir).display());
    Ok(guard)
}

fn log_file(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE)
}

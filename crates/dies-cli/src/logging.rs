use std::{fs, path::PathBuf, str::FromStr};

use anyhow::{anyhow, bail, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Sets up tracing to stderr and to a JSON log file.
///
/// `log_file` is either a path that must not exist yet, or `"auto"` for a
/// timestamped file in the local data directory. Records emitted through the `log`
/// facade by the library crates end up in the same sinks. The returned guard must
/// be kept alive until the program exits so the file writer gets flushed.
pub fn setup_logging(log_level: &str, log_file: &str) -> Result<WorkerGuard> {
    let log_file_path = if log_file != "auto" {
        let path = PathBuf::from(log_file);
        if path.exists() {
            bail!("Log file already exists: {}", path.display());
        }
        path
    } else {
        let time = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
        let filename = format!("dies-{time}.log");
        dirs::data_local_dir()
            .map(|p| p.join("dies").join(&filename))
            .unwrap_or_else(|| PathBuf::from(&filename))
    };

    let dir = match log_file_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    let file_name = log_file_path
        .file_name()
        .context("Log file path has no file name")?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);

    let log_level = tracing::Level::from_str(log_level)
        .map_err(|_| anyhow!("Invalid log level: {}", log_level))?;
    let stderr_layer = fmt::layer().without_time().with_writer(std::io::stderr);
    let logfile_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(non_blocking_appender);
    tracing_subscriber::registry()
        .with(LevelFilter::from_level(log_level))
        .with(stderr_layer)
        .with(logfile_layer)
        .try_init()
        .context("Unable to set global tracing subscriber")?;

    tracing::info!("Saving logs to {}", log_file_path.display());
    Ok(guard)
}

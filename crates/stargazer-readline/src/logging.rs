//! Tracing setup.
//!
//! Logs go to a daily rolling file so they never interleave with the REPL.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_FILE_PREFIX: &str = "stargazer.log";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `default_filter`. The returned guard must be held
/// until exit so buffered lines are flushed.
pub fn init(logs_dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)?;

    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    Ok(guard)
}

/// Like [`init`], but a failure only disables file logging.
///
/// The warning goes to stderr since no subscriber is installed.
pub fn init_or_warn(logs_dir: &Path, default_filter: &str) -> Option<WorkerGuard> {
    match init(logs_dir, default_filter) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!(
                "{}",
                format!("⚠ File logging disabled ({}): {err}", logs_dir.display()).yellow()
            );
            None
        }
    }
}

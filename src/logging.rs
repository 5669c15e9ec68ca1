//! Tracing subscriber setup.
//!
//! CLI commands log to stderr. The TUI logs to a file so log lines never
//! land on the alternate screen.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Append to a file
    File(PathBuf),
}

/// Default TUI log file: `<config_dir>/LazyMotion/lazymotion.log`.
pub fn default_log_file() -> Result<PathBuf> {
    Ok(Config::config_dir()?.join("lazymotion.log"))
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug`
/// with `verbose`.
pub fn init(target: &LogTarget, verbose: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { "info" };
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to install logger")?,
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to install logger")?;
        }
    }

    Ok(())
}

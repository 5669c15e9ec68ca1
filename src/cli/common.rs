//! Shared CLI plumbing: exit codes, errors, and session loading.

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::error::MotionError;
use crate::services::{LoadReport, MotionFileService, Session};

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad arguments or a result that does not exist (e.g. time not found)
    ValidationError = 1,
    /// File could not be read, parsed, or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// I/O or parse failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<MotionError> for CliError {
    fn from(err: MotionError) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads user config, falling back to defaults (and logging why) when unreadable.
pub fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %format!("{e:#}"), "ignoring unreadable config, using defaults");
        Config::default()
    })
}

/// Loads a CSV file into a fresh session.
pub fn load_session(path: &Path, config: &Config) -> CliResult<(Session, LoadReport)> {
    let mut session = Session::new();
    let report = MotionFileService::load_into(&mut session, path, config.timestamps.numeric_unit)
        .map_err(|e| CliError::io(format!("Failed to load {}: {e}", path.display())))?;
    Ok((session, report))
}

/// Checks that `index` addresses a loaded frame.
pub fn check_frame_index(session: &Session, index: usize) -> CliResult<()> {
    let len = session.frames().len();
    if index >= len {
        return Err(CliError::validation(format!(
            "Frame {index} out of range (file has {len} frames)"
        )));
    }
    Ok(())
}

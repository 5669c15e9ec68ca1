//! Resolve command: time in seconds to frame index.

use crate::cli::common::{load_config, load_session, CliError, CliResult};
use crate::services::resolve_time_index;
use clap::Args;
use std::path::PathBuf;

/// Print the first frame at or after a time
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Path to motion CSV file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Target time in seconds since the first frame
    #[arg(long, value_name = "SECONDS", allow_hyphen_values = true)]
    pub time: f64,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self) -> CliResult<()> {
        if !self.time.is_finite() {
            return Err(CliError::validation(format!(
                "Time must be a finite number of seconds, got {}",
                self.time
            )));
        }

        let config = load_config();
        let (session, _) = load_session(&self.file, &config)?;

        let index = resolve_time_index(session.frames().as_slice(), self.time).ok_or_else(|| {
            CliError::validation(format!(
                "not found: no frame at or after {}s (duration {:.3}s)",
                self.time,
                session.frames().duration()
            ))
        })?;

        println!("{index}");
        Ok(())
    }
}

//! Export command: headless annotate-and-export.

use crate::cli::common::{load_config, load_session, CliError, CliResult};
use crate::services::MotionFileService;
use clap::Args;
use std::path::PathBuf;

/// Write the annotated CSV, optionally flagging frames first
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to motion CSV file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Flag a frame before exporting (repeatable)
    #[arg(long = "flag", value_name = "INDEX=LABEL", value_parser = parse_flag)]
    pub flags: Vec<(usize, String)>,

    /// Output path (defaults to the configured export location)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Parses `INDEX=LABEL`.
fn parse_flag(raw: &str) -> Result<(usize, String), String> {
    let (index, label) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=LABEL, got '{raw}'"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid frame index '{index}'"))?;
    if label.is_empty() {
        return Err(format!("empty label for frame {index}"));
    }
    Ok((index, label.to_string()))
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let (mut session, _) = load_session(&self.file, &config)?;

        for (index, label) in &self.flags {
            if !session.add_flag(*index, label.clone()) {
                return Err(CliError::validation(format!(
                    "Cannot flag frame {index}: file has {} frames",
                    session.frames().len()
                )));
            }
        }

        let text = session
            .export_csv()?
            .ok_or_else(|| CliError::validation("No frames to export"))?;

        let output_path = self.output.clone().unwrap_or_else(|| config.export_path());
        MotionFileService::write_output(&output_path, &text)?;
        session.mark_exported();

        println!("Exported {} frames to: {}", session.frames().len(), output_path.display());
        Ok(())
    }
}

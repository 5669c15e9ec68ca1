//! Inspect command: load report or a single frame's contents.

use crate::cli::common::{check_frame_index, load_config, load_session, CliError, CliResult};
use crate::export::header_union;
use crate::models::{KeypointMap, KeypointName, RawRow};
use crate::parser::{extract_keypoints, parse_keypoint_column};
use crate::services::{LoadReport, Session};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Show a load summary, or the fields and keypoints of one frame
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to motion CSV file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Frame index to show instead of the summary
    #[arg(long, value_name = "N")]
    pub frame: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for the load summary.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Load counters
    #[serde(flatten)]
    pub report: LoadReport,
    /// Columns across all frames, in first-seen order
    pub columns: Vec<String>,
    /// Landmarks that have at least one coordinate column
    pub keypoints: Vec<KeypointName>,
}

/// JSON response for a single frame.
#[derive(Debug, Serialize)]
pub struct FrameResponse<'a> {
    /// Frame index
    pub index: usize,
    /// Seconds since the first frame
    pub relative_time: f64,
    /// All columns of the frame
    pub fields: &'a RawRow,
    /// Extracted keypoints
    pub keypoints: KeypointMap,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let (session, report) = load_session(&self.file, &config)?;

        match self.frame {
            Some(index) => self.print_frame(&session, index),
            None => self.print_summary(&session, report),
        }
    }

    fn print_summary(&self, session: &Session, report: LoadReport) -> CliResult<()> {
        let columns = header_union(session.frames());
        let keypoints: BTreeSet<KeypointName> = columns
            .iter()
            .filter_map(|column| parse_keypoint_column(column))
            .map(|(name, _)| name)
            .collect();

        let response = SummaryResponse {
            report,
            columns,
            keypoints: keypoints.into_iter().collect(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        let report = &response.report;
        println!("Source: {}", report.source);
        println!("Frames: {}", report.frames);
        println!("Duration: {:.3}s", report.duration);
        println!("Discarded rows: {}", report.discarded);
        if report.unreadable > 0 {
            println!("Unreadable records: {}", report.unreadable);
        }
        if report.unparsed_timestamps > 0 {
            println!("Unparsed timestamps: {}", report.unparsed_timestamps);
        }
        println!("Columns ({}):", response.columns.len());
        for column in &response.columns {
            println!("  {column}");
        }
        println!("Keypoints ({}):", response.keypoints.len());
        for name in &response.keypoints {
            println!("  {name}");
        }
        Ok(())
    }

    fn print_frame(&self, session: &Session, index: usize) -> CliResult<()> {
        check_frame_index(session, index)?;
        let Some(frame) = session.frames().get(index) else {
            return Err(CliError::validation(format!("Frame {index} not found")));
        };

        let response = FrameResponse {
            index,
            relative_time: frame.relative_time,
            fields: &frame.fields,
            keypoints: extract_keypoints(frame),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("Frame {index} at {:.3}s", response.relative_time);
        println!("Fields:");
        for field in response.fields.iter() {
            println!("  {:<32} {}", field.name, field.value);
        }
        println!("Keypoints:");
        for (name, keypoint) in &response.keypoints {
            match keypoint.position() {
                Some((x, y)) => println!("  {:<16} ({x}, {y})", name.as_str()),
                None => println!("  {:<16} (incomplete)", name.as_str()),
            }
        }
        Ok(())
    }
}

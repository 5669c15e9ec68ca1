//! Frame-data pipeline: CSV text to rows, rows to frames, frames to keypoints.
//!
//! Each stage is a pure function. The [`load_frames`] helper chains the first
//! two stages for callers that only need the finished sequence.

pub mod csv_rows;
pub mod keypoints;
pub mod timestamps;

pub use csv_rows::{infer_cell, parse_rows, ParsedRows};
pub use keypoints::{extract_keypoints, parse_keypoint_column, Axis};
pub use timestamps::{
    normalize_timestamps, parse_instant, seconds_between, NormalizedFrames, NumericUnit,
};

use crate::error::MotionResult;
use crate::models::Frame;

/// Counts and frames produced by one full parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedFrames {
    /// Normalized frames in file order
    pub frames: Vec<Frame>,
    /// Header names in file order
    pub headers: Vec<String>,
    /// Rows filtered out as degenerate
    pub discarded: usize,
    /// Records the CSV reader rejected
    pub unreadable: usize,
    /// Rows dropped because their timestamp did not parse
    pub unparsed_timestamps: usize,
}

/// Parses CSV text and normalizes its timestamps.
///
/// # Errors
///
/// Returns a parse error for headerless input and a baseline error when the
/// first retained row has an unreadable timestamp.
pub fn load_frames(text: &str, unit: NumericUnit) -> MotionResult<LoadedFrames> {
    let parsed = parse_rows(text)?;
    let normalized = normalize_timestamps(parsed.rows, unit)?;

    Ok(LoadedFrames {
        frames: normalized.frames,
        headers: parsed.headers,
        discarded: parsed.discarded,
        unreadable: parsed.unreadable,
        unparsed_timestamps: normalized.unparsed,
    })
}

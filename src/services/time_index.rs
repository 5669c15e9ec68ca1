//! Time index resolver: target time to frame index.

use crate::models::Frame;

/// Returns the index of the first frame whose relative time is at or after `target`.
///
/// Frames are scanned from the start. `None` means no frame reaches the
/// target (or the target is not finite); callers keep their current index.
#[must_use]
pub fn resolve_time_index(frames: &[Frame], target: f64) -> Option<usize> {
    if !target.is_finite() {
        return None;
    }
    frames.iter().position(|frame| frame.relative_time >= target)
}

/// Parses user-entered seconds. Non-numeric or non-finite input is rejected.
#[must_use]
pub fn parse_time_target(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|target| target.is_finite())
}

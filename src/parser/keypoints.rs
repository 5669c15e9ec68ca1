//! Keypoint extractor: flat frame columns into a named landmark map.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{CellValue, Frame, Keypoint, KeypointMap, KeypointName, RawRow};

/// `KeypointType.<NAME>_x` or `KeypointType.<NAME>_y`.
static KEYPOINT_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^KeypointType\.([A-Za-z0-9_]+)_(x|y)$").expect("keypoint column pattern is valid")
});

/// Which coordinate a keypoint column carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal coordinate
    X,
    /// Vertical coordinate
    Y,
}

/// Splits a keypoint column name into its landmark and axis.
///
/// Returns `None` for columns that do not follow the naming scheme or name a
/// landmark outside the fixed set.
#[must_use]
pub fn parse_keypoint_column(column: &str) -> Option<(KeypointName, Axis)> {
    let captures = KEYPOINT_COLUMN.captures(column)?;
    let name = captures.get(1)?.as_str().parse::<KeypointName>().ok()?;
    let axis = match captures.get(2)?.as_str() {
        "x" => Axis::X,
        _ => Axis::Y,
    };
    Some((name, axis))
}

/// Extracts keypoints from a row's columns.
///
/// An entry is created on first sight of either coordinate. Null or
/// non-numeric cells leave that coordinate `None`.
#[must_use]
pub fn extract_from_row(row: &RawRow) -> KeypointMap {
    let mut keypoints = KeypointMap::new();

    for field in row.iter() {
        let Some((name, axis)) = parse_keypoint_column(&field.name) else {
            continue;
        };
        let entry = keypoints.entry(name).or_insert_with(Keypoint::default);
        let value = match field.value {
            CellValue::Number(n) => Some(n),
            _ => None,
        };
        match axis {
            Axis::X => entry.x = value,
            Axis::Y => entry.y = value,
        }
    }

    keypoints
}

/// Extracts the keypoints of one frame.
#[must_use]
pub fn extract_keypoints(frame: &Frame) -> KeypointMap {
    extract_from_row(&frame.fields)
}

//! Frames and the ordered frame sequence.

use super::value::{CellValue, RawRow};
use crate::constants::TIMESTAMP_COLUMN;

/// One time-sampled observation of the motion sequence.
///
/// `fields` holds every original column. Its `timestamp` cell has been
/// rewritten to the relative time, so it always agrees with `relative_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Seconds elapsed since the first frame
    pub relative_time: f64,
    /// Original row fields with the timestamp normalized
    pub fields: RawRow,
}

impl Frame {
    /// Builds a frame from a row, rewriting its timestamp cell.
    #[must_use]
    pub fn new(mut fields: RawRow, relative_time: f64) -> Self {
        fields.insert(TIMESTAMP_COLUMN, CellValue::Number(relative_time));
        Self {
            relative_time,
            fields,
        }
    }
}

/// Ordered frames loaded from one file. Index = position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    source_name: Option<String>,
}

impl FrameSequence {
    /// Creates a sequence from already-normalized frames.
    #[must_use]
    pub const fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            source_name: None,
        }
    }

    /// Attaches the display name of the file the frames came from.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Display name of the source file, if known.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Frame at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no frames are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the last frame, if any.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.frames.len().checked_sub(1)
    }

    /// Relative time of the last frame (0.0 when empty).
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.frames.last().map_or(0.0, |f| f.relative_time)
    }

    /// Iterates frames in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// All frames as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Frame] {
        &self.frames
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rewrites_timestamp_cell() {
        let row: RawRow = [
            ("timestamp", CellValue::Text("2024-01-01T00:00:01Z".to_string())),
            ("speed", CellValue::Number(3.0)),
        ]
        .into_iter()
        .collect();

        let frame = Frame::new(row, 1.5);
        assert_eq!(frame.fields.get("timestamp"), Some(&CellValue::Number(1.5)));
        assert_eq!(frame.fields.get("speed"), Some(&CellValue::Number(3.0)));
    }

    #[test]
    fn test_sequence_bounds() {
        let empty = FrameSequence::default();
        assert!(empty.is_empty());
        assert_eq!(empty.last_index(), None);
        assert!(empty.duration().abs() < f64::EPSILON);

        let seq = FrameSequence::new(vec![
            Frame::new(RawRow::new(), 0.0),
            Frame::new(RawRow::new(), 0.75),
        ])
        .with_source_name("walk.csv");
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.last_index(), Some(1));
        assert!((seq.duration() - 0.75).abs() < f64::EPSILON);
        assert_eq!(seq.source_name(), Some("walk.csv"));
    }
}

//! Explicit session state: loaded frames, current position, and flags.
//!
//! The UI and the CLI both drive a [`Session`]. A load only replaces the
//! sequence after it has fully succeeded, so a failed load leaves the
//! previous frames, position, and flags untouched.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::MotionResult;
use crate::export::export_annotated_csv;
use crate::models::{AnnotationMap, Frame, FrameSequence, KeypointMap};
use crate::parser::{self, extract_keypoints, NumericUnit};
use crate::services::time_index::resolve_time_index;

/// Summary of a successful load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    /// Display name of the loaded source
    pub source: String,
    /// Frames in the new sequence
    pub frames: usize,
    /// Degenerate rows filtered out
    pub discarded: usize,
    /// Records the CSV reader rejected
    pub unreadable: usize,
    /// Rows dropped for an unparseable timestamp
    pub unparsed_timestamps: usize,
    /// Relative time of the last frame, in seconds
    pub duration: f64,
}

/// Session state shared by every frame operation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    frames: FrameSequence,
    current_index: usize,
    annotations: AnnotationMap,
    dirty: bool,
}

impl Session {
    /// Creates an empty session with no frames loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses CSV text and, on success, replaces the whole session.
    ///
    /// The index resets to 0 and existing flags are discarded.
    ///
    /// # Errors
    ///
    /// Returns the parse or baseline error unchanged; the session is not modified.
    pub fn load_csv_text(
        &mut self,
        text: &str,
        source_name: impl Into<String>,
        unit: NumericUnit,
    ) -> MotionResult<LoadReport> {
        let source = source_name.into();
        let loaded = parser::load_frames(text, unit)?;

        let frames = FrameSequence::new(loaded.frames).with_source_name(source.clone());
        let report = LoadReport {
            source,
            frames: frames.len(),
            discarded: loaded.discarded,
            unreadable: loaded.unreadable,
            unparsed_timestamps: loaded.unparsed_timestamps,
            duration: frames.duration(),
        };

        self.frames = frames;
        self.current_index = 0;
        self.annotations.clear();
        self.dirty = false;

        info!(
            source = %report.source,
            frames = report.frames,
            discarded = report.discarded,
            duration = report.duration,
            "loaded motion data"
        );
        Ok(report)
    }

    /// The loaded frame sequence.
    #[must_use]
    pub const fn frames(&self) -> &FrameSequence {
        &self.frames
    }

    /// Flags placed so far.
    #[must_use]
    pub const fn annotations(&self) -> &AnnotationMap {
        &self.annotations
    }

    /// Index of the frame being viewed.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns true if flags changed since the last export.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns true if at least one frame is loaded.
    #[must_use]
    pub fn has_frames(&self) -> bool {
        !self.frames.is_empty()
    }

    /// The frame being viewed, if any.
    #[must_use]
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.get(self.current_index)
    }

    /// Keypoints of the current frame, recomputed on each call.
    #[must_use]
    pub fn current_keypoints(&self) -> KeypointMap {
        self.current_frame()
            .map(extract_keypoints)
            .unwrap_or_default()
    }

    /// Flag of the current frame, if any.
    #[must_use]
    pub fn current_flag(&self) -> Option<&str> {
        self.annotations.get(self.current_index)
    }

    /// Moves to `index`, clamped to the loaded range. Returns the new index.
    pub fn select_index(&mut self, index: usize) -> usize {
        self.current_index = self.frames.last_index().map_or(0, |last| index.min(last));
        self.current_index
    }

    /// Moves by `delta` frames, clamped to the loaded range.
    pub fn step(&mut self, delta: isize) -> usize {
        self.select_index(self.current_index.saturating_add_signed(delta))
    }

    /// Advances one frame; stays put on the last frame.
    pub fn next(&mut self) -> usize {
        self.step(1)
    }

    /// Goes back one frame; stays put on the first frame.
    pub fn previous(&mut self) -> usize {
        self.step(-1)
    }

    /// Moves to the first frame.
    pub fn first(&mut self) -> usize {
        self.select_index(0)
    }

    /// Moves to the last frame.
    pub fn last(&mut self) -> usize {
        self.select_index(usize::MAX)
    }

    /// Moves to the first frame at or after `target` seconds.
    ///
    /// Returns `None` and leaves the index unchanged when no frame qualifies.
    pub fn jump_to_time(&mut self, target: f64) -> Option<usize> {
        let index = resolve_time_index(self.frames.as_slice(), target)?;
        debug!(time = target, index, "jumped to time");
        Some(self.select_index(index))
    }

    /// Sets the flag of `frame_index`, replacing any previous label.
    ///
    /// Returns false (and does nothing) if the index is outside the sequence.
    pub fn add_flag(&mut self, frame_index: usize, label: impl Into<String>) -> bool {
        if frame_index >= self.frames.len() {
            return false;
        }
        let label = label.into();
        debug!(frame = frame_index, label = %label, "flagged frame");
        self.annotations.set(frame_index, label);
        self.dirty = true;
        true
    }

    /// Removes the flag of `frame_index`. Returns the removed label.
    pub fn clear_flag(&mut self, frame_index: usize) -> Option<String> {
        let removed = self.annotations.remove(frame_index);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// Serializes the frames merged with their flags.
    ///
    /// # Errors
    ///
    /// Returns a write error if CSV serialization fails.
    pub fn export_csv(&self) -> MotionResult<Option<String>> {
        export_annotated_csv(&self.frames, &self.annotations)
    }

    /// Records that the current flags have been written out.
    pub fn mark_exported(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MotionError;
    use crate::models::{KeypointName, FLAG_T_CUE, FLAG_T_FIRST_MOVEMENT};

    const THREE_ROWS: &str = "timestamp,KeypointType.NOSE_x,KeypointType.NOSE_y\n\
                              2024-01-01T00:00:00Z,10,20\n\
                              2024-01-01T00:00:00.5Z,11,21\n\
                              2024-01-01T00:00:01Z,12,22\n";

    fn loaded() -> Session {
        let mut session = Session::new();
        session
            .load_csv_text(THREE_ROWS, "three.csv", NumericUnit::Milliseconds)
            .unwrap();
        session
    }

    #[test]
    fn test_load_reports_counts() {
        let mut session = Session::new();
        let report = session
            .load_csv_text(THREE_ROWS, "three.csv", NumericUnit::Milliseconds)
            .unwrap();

        assert_eq!(report.frames, 3);
        assert_eq!(report.discarded, 0);
        assert!((report.duration - 1.0).abs() < 1e-9);
        assert_eq!(session.frames().source_name(), Some("three.csv"));
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut session = loaded();

        assert_eq!(session.previous(), 0);
        assert_eq!(session.next(), 1);
        assert_eq!(session.next(), 2);
        assert_eq!(session.next(), 2);
        assert_eq!(session.step(-10), 0);
        assert_eq!(session.step(10), 2);
        assert_eq!(session.first(), 0);
        assert_eq!(session.last(), 2);
        assert_eq!(session.select_index(99), 2);
    }

    #[test]
    fn test_navigation_on_empty_session_stays_at_zero() {
        let mut session = Session::new();
        assert_eq!(session.next(), 0);
        assert_eq!(session.last(), 0);
        assert!(session.current_frame().is_none());
        assert!(session.current_keypoints().is_empty());
    }

    #[test]
    fn test_jump_to_time_not_found_keeps_index() {
        let mut session = loaded();
        session.select_index(1);

        assert_eq!(session.jump_to_time(0.7), Some(2));
        session.select_index(1);
        assert_eq!(session.jump_to_time(5.0), None);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_current_keypoints_follow_index() {
        let mut session = loaded();
        session.next();
        let nose = session.current_keypoints()[&KeypointName::Nose];
        assert_eq!(nose.position(), Some((11.0, 21.0)));
    }

    #[test]
    fn test_second_flag_overwrites_first() {
        let mut session = loaded();
        assert!(session.add_flag(0, FLAG_T_CUE));
        assert!(session.add_flag(0, FLAG_T_FIRST_MOVEMENT));

        assert_eq!(session.current_flag(), Some(FLAG_T_FIRST_MOVEMENT));
        assert_eq!(session.annotations().len(), 1);
    }

    #[test]
    fn test_flag_outside_sequence_is_ignored() {
        let mut session = loaded();
        assert!(!session.add_flag(3, FLAG_T_CUE));
        assert!(session.annotations().is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_dirty_tracks_unexported_flags() {
        let mut session = loaded();
        session.add_flag(1, FLAG_T_CUE);
        assert!(session.is_dirty());

        session.mark_exported();
        assert!(!session.is_dirty());

        assert_eq!(session.clear_flag(1), Some(FLAG_T_CUE.to_string()));
        assert!(session.is_dirty());
    }

    #[test]
    fn test_failed_load_preserves_previous_state() {
        let mut session = loaded();
        session.select_index(2);
        session.add_flag(2, FLAG_T_CUE);

        let bad = "timestamp,a\nnot-a-date,1\n";
        let err = session
            .load_csv_text(bad, "bad.csv", NumericUnit::Milliseconds)
            .unwrap_err();

        assert!(matches!(err, MotionError::TimestampBaseline { .. }));
        assert_eq!(session.frames().len(), 3);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.current_flag(), Some(FLAG_T_CUE));
    }

    #[test]
    fn test_new_load_resets_index_and_flags() {
        let mut session = loaded();
        session.last();
        session.add_flag(2, FLAG_T_CUE);

        session
            .load_csv_text(THREE_ROWS, "again.csv", NumericUnit::Milliseconds)
            .unwrap();
        assert_eq!(session.current_index(), 0);
        assert!(session.annotations().is_empty());
        assert!(!session.is_dirty());
    }
}

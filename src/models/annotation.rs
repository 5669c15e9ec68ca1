//! Per-frame flag annotations.

use std::collections::BTreeMap;

/// Built-in label for the cue onset.
pub const FLAG_T_CUE: &str = "T-cue";

/// Built-in label for the first detected movement.
pub const FLAG_T_FIRST_MOVEMENT: &str = "T-first-movement";

/// Mapping from frame index to flag label.
///
/// The label vocabulary is open: any string is accepted. Each frame holds at
/// most one flag and the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationMap {
    flags: BTreeMap<usize, String>,
}

impl AnnotationMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: BTreeMap::new(),
        }
    }

    /// Sets the flag for a frame, returning the label it replaced.
    pub fn set(&mut self, frame_index: usize, label: impl Into<String>) -> Option<String> {
        self.flags.insert(frame_index, label.into())
    }

    /// Removes the flag for a frame, returning it.
    pub fn remove(&mut self, frame_index: usize) -> Option<String> {
        self.flags.remove(&frame_index)
    }

    /// Flag label for a frame.
    #[must_use]
    pub fn get(&self, frame_index: usize) -> Option<&str> {
        self.flags.get(&frame_index).map(String::as_str)
    }

    /// Number of flagged frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true if no frame is flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Drops every flag.
    pub fn clear(&mut self) {
        self.flags.clear();
    }

    /// Iterates `(frame_index, label)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.flags.iter().map(|(i, l)| (*i, l.as_str()))
    }
}

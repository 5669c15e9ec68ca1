//! Data models for motion frames, keypoints, and annotations.
//!
//! This module contains the core data structures shared by the parser,
//! the session, the renderer, and the UI. Models are independent of UI
//! and I/O.

pub mod annotation;
pub mod frame;
pub mod keypoint;
pub mod rgb;
pub mod value;

// Re-export all model types
pub use annotation::{AnnotationMap, FLAG_T_CUE, FLAG_T_FIRST_MOVEMENT};
pub use frame::{Frame, FrameSequence};
pub use keypoint::{Keypoint, KeypointMap, KeypointName, SkeletonEdge, UnknownKeypoint, SKELETON_EDGES};
pub use rgb::RgbColor;
pub use value::{CellValue, Field, RawRow};

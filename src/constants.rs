//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed rendering surface size.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LazyMotion";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "lazymotion";

/// Name of the column every input row must carry.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Name of the trailing annotation column in exported files.
pub const FLAG_COLUMN: &str = "Flag";

/// Default file name for annotated exports.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "annotated_motion_data.csv";

/// Width of the skeleton drawing surface in pixels.
pub const SURFACE_WIDTH: f64 = 640.0;

/// Height of the skeleton drawing surface in pixels.
pub const SURFACE_HEIGHT: f64 = 480.0;

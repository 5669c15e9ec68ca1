//! Shared test fixtures for motion CSV integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Header with the timestamp column followed by x/y columns of `names`.
pub fn keypoint_header(names: &[&str]) -> String {
    let mut columns = vec!["timestamp".to_string()];
    for name in names {
        columns.push(format!("KeypointType.{name}_x"));
        columns.push(format!("KeypointType.{name}_y"));
    }
    columns.join(",")
}

/// Three frames 0.5s apart with a moving nose.
pub fn three_frame_csv() -> String {
    format!(
        "{}\n\
         2024-01-01T00:00:00.000Z,10,20\n\
         2024-01-01T00:00:00.500Z,11,21\n\
         2024-01-01T00:00:01.000Z,12,22\n",
        keypoint_header(&["NOSE"])
    )
}

/// Frames at 0, 0.5, 1.2 and 2.0 seconds.
pub fn uneven_timing_csv() -> String {
    format!(
        "{}\n\
         2024-01-01 00:00:00.000,10,20\n\
         2024-01-01 00:00:00.500,10,20\n\
         2024-01-01 00:00:01.200,10,20\n\
         2024-01-01 00:00:02.000,10,20\n",
        keypoint_header(&["NOSE"])
    )
}

/// Current-day timestamps a few milliseconds apart, as RFC 3339 text.
pub fn millisecond_offsets_csv() -> String {
    format!(
        "{}\n\
         2024-03-05T12:30:45.000Z,10,20\n\
         2024-03-05T12:30:45.123Z,11,21\n\
         2024-03-05T12:30:45.456Z,12,22\n",
        keypoint_header(&["NOSE"])
    )
}

/// The same offsets as epoch milliseconds.
pub fn epoch_millis_csv() -> String {
    format!(
        "{}\n1709641845000,10,20\n1709641845123,11,21\n1709641845456,12,22\n",
        keypoint_header(&["NOSE"])
    )
}

/// One frame with both shoulders and elbows present.
pub fn upper_body_csv() -> String {
    format!(
        "{}\n2024-01-01T00:00:00Z,200,150,440,150,180,250,460,250\n",
        keypoint_header(&["LEFT_SHOULDER", "RIGHT_SHOULDER", "LEFT_ELBOW", "RIGHT_ELBOW"])
    )
}

/// Writes `content` to `name` inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn create_temp_csv(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write CSV file");
    (path, temp_dir)
}

/// Command for the built binary with an isolated config directory.
pub fn lazymotion(config_home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_lazymotion"));
    command
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG");
    command
}

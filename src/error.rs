//! Error taxonomy for the frame-data pipeline.
//!
//! Hard failures abort a load and leave the previous session untouched.
//! Soft outcomes (degenerate rows, time not found, empty dataset) are not
//! errors at all: they surface as counters, `None`, or no-ops.

use std::path::PathBuf;

/// Failures surfaced by the motion data pipeline.
#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    /// The CSV text is structurally unreadable.
    #[error("CSV parse error: {0}")]
    Parse(String),

    /// The first row's timestamp could not be interpreted as a date-time,
    /// so no relative timeline can be built.
    #[error("Cannot use first timestamp '{raw}' as the time baseline")]
    TimestampBaseline {
        /// The unparseable timestamp cell, as text
        raw: String,
    },

    /// The annotated CSV could not be serialized.
    #[error("CSV write error: {0}")]
    Write(String),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved in the failed operation
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl MotionError {
    /// Shorthand for building a parse error from any displayable message.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// Result alias for pipeline operations.
pub type MotionResult<T> = Result<T, MotionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_error_mentions_raw_value() {
        let err = MotionError::TimestampBaseline {
            raw: "not-a-date".to_string(),
        };
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = MotionError::Io {
            path: PathBuf::from("/tmp/missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/missing.csv"));
        assert!(message.contains("gone"));
    }
}

//! Motion file I/O service.
//!
//! Centralizes reading input CSV files and writing output files (annotated
//! exports and rendered SVGs), so the TUI and the CLI share the same error
//! reporting and atomic writes.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{MotionError, MotionResult};
use crate::parser::NumericUnit;
use crate::services::session::{LoadReport, Session};

/// Service for motion CSV file operations.
pub struct MotionFileService;

impl MotionFileService {
    /// Reads a CSV file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Io`] if the file cannot be read and
    /// [`MotionError::Parse`] if it is not valid UTF-8.
    pub fn read_text(path: &Path) -> MotionResult<String> {
        let bytes = fs::read(path).map_err(|source| MotionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|e| {
            MotionError::parse(format!(
                "{} is not valid UTF-8 text (byte {})",
                path.display(),
                e.utf8_error().valid_up_to()
            ))
        })
    }

    /// Reads `path` and loads it into `session`.
    ///
    /// The session keeps its previous state if anything fails.
    ///
    /// # Errors
    ///
    /// Returns read, parse, or baseline errors.
    pub fn load_into(session: &mut Session, path: &Path, unit: NumericUnit) -> MotionResult<LoadReport> {
        let text = Self::read_text(path)?;
        session.load_csv_text(&text, Self::display_name(path), unit)
    }

    /// Writes `text` to `path` using a temp file + rename, creating the parent
    /// directory first.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Io`] if the directory cannot be created or the
    /// write or rename fails.
    pub fn write_output(path: &Path, text: &str) -> MotionResult<()> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| MotionError::Io { path, source }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }

        let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
        temp_name.push(".tmp");
        let temp_path = path.with_file_name(temp_name);
        fs::write(&temp_path, text).map_err(io_err(&temp_path))?;
        fs::rename(&temp_path, path).map_err(io_err(path))?;

        info!(path = %path.display(), bytes = text.len(), "wrote output file");
        Ok(())
    }

    /// File name shown in the UI for a loaded path.
    #[must_use]
    pub fn display_name(path: &Path) -> String {
        path.file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
    }
}

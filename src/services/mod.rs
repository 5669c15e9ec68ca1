//! Service layer for session logic and file I/O.
//!
//! This module contains the session object every frame operation goes
//! through, the time index resolver, and the file service shared by the
//! TUI and the CLI.

pub mod motion_files;
pub mod session;
pub mod time_index;

// Re-export commonly used types and functions
pub use motion_files::MotionFileService;
pub use session::{LoadReport, Session};
pub use time_index::{parse_time_target, resolve_time_index};

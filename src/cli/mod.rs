//! CLI command handlers for LazyMotion.
//!
//! This module provides headless, scriptable access to the frame pipeline
//! for automation and batch annotation.

pub mod common;
pub mod export;
pub mod inspect;
pub mod render;
pub mod resolve;

// Re-export types used by main.rs and tests
pub use common::{CliError, ExitCode};
pub use export::ExportArgs;
pub use inspect::InspectArgs;
pub use render::RenderArgs;
pub use resolve::ResolveArgs;

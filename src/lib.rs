//! LazyMotion Library
//!
//! This library provides the core of the LazyMotion pose scrubber: parsing
//! motion tracking CSV files into frames, resolving times to frames,
//! rendering the pose skeleton, and exporting flagged frames.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod parser;
pub mod render;
pub mod services;
pub mod shortcuts;
pub mod tui;

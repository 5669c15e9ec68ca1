//! Configuration management for the application.
//!
//! This module handles loading and validating user preferences from a
//! hand-edited TOML file with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, DEFAULT_EXPORT_FILE_NAME, SURFACE_HEIGHT};
use crate::models::RgbColor;
use crate::parser::NumericUnit;
use crate::render::{
    RenderStyle, DEFAULT_BONE_COLOR, DEFAULT_BONE_WIDTH, DEFAULT_JOINT_COLOR, DEFAULT_JOINT_RADIUS,
};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Skeleton styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Bone line color (`#RRGGBB`)
    pub bone_color: RgbColor,
    /// Joint marker color (`#RRGGBB`)
    pub joint_color: RgbColor,
    /// Bone line width in surface pixels
    pub bone_width: f64,
    /// Joint marker radius in surface pixels
    pub joint_radius: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bone_color: DEFAULT_BONE_COLOR,
            joint_color: DEFAULT_JOINT_COLOR,
            bone_width: DEFAULT_BONE_WIDTH,
            joint_radius: DEFAULT_JOINT_RADIUS,
        }
    }
}

impl RenderConfig {
    /// Style handed to the skeleton renderer.
    #[must_use]
    pub const fn style(&self) -> RenderStyle {
        RenderStyle {
            bone_color: self.bone_color,
            bone_width: self.bone_width,
            joint_color: self.joint_color,
            joint_radius: self.joint_radius,
        }
    }
}

/// Annotated export destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for exported files (current directory when unset)
    pub output_dir: Option<PathBuf>,
    /// Export file name
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

/// Timestamp interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimestampConfig {
    /// Unit of purely numeric timestamp cells
    pub numeric_unit: NumericUnit,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LazyMotion/config.toml`
/// - macOS: `~/Library/Application Support/LazyMotion/config.toml`
/// - Windows: `%APPDATA%\LazyMotion\config.toml`
///
/// # Validation
///
/// - `bone_width` and `joint_radius` must be positive and no larger than the
///   480 pixel surface height
/// - `file_name` must be a bare file name ending in `.csv`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI preferences
    pub ui: UiConfig,
    /// Skeleton styling
    pub render: RenderConfig,
    /// Export destination
    pub export: ExportConfig,
    /// Timestamp parsing
    pub timestamps: TimestampConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/LazyMotion/`
    /// - macOS: `~/Library/Application Support/LazyMotion/`
    /// - Windows: `%APPDATA%\LazyMotion\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `config_path`, falling back to defaults when missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", config_path.display()))?;

        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("bone_width", self.render.bone_width),
            ("joint_radius", self.render.joint_radius),
        ] {
            if !(value.is_finite() && value > 0.0 && value <= SURFACE_HEIGHT) {
                anyhow::bail!(
                    "render.{key} must be a positive number no larger than {SURFACE_HEIGHT}, got {value}"
                );
            }
        }

        let file_name = &self.export.file_name;
        if !file_name.to_ascii_lowercase().ends_with(".csv") || file_name.len() <= ".csv".len() {
            anyhow::bail!("export.file_name must end in .csv, got '{file_name}'");
        }
        if file_name.contains(['/', '\\']) {
            anyhow::bail!("export.file_name must not contain a directory, got '{file_name}'");
        }

        Ok(())
    }

    /// Resolved path of the annotated export file.
    #[must_use]
    pub fn export_path(&self) -> PathBuf {
        self.export
            .output_dir
            .as_ref()
            .map_or_else(|| PathBuf::from(&self.export.file_name), |dir| dir.join(&self.export.file_name))
    }
}

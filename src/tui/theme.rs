//! Theme system for consistent UI colors across dark and light modes.
//!
//! Detects the OS theme (dark/light mode) through `dark-light` unless the
//! user pinned one in the config.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Borders, titles, and emphasis
    pub primary: Color,
    /// Highlights and key hints
    pub accent: Color,
    /// Confirmations and success messages
    pub success: Color,
    /// Errors and destructive actions
    pub error: Color,
    /// Warnings and the unexported-flags marker
    pub warning: Color,
    /// Flag labels on the title bar and timeline
    pub flag: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Help text and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Canvas background behind the skeleton
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for a configured mode. `Auto` asks the OS.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            flag: Color::Magenta,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(20, 20, 20),
        }
    }

    /// Light theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),
            flag: Color::Rgb(150, 0, 150),

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(40, 40, 40),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

//! Component trait pattern for TUI components.
//!
//! This module defines the trait used to implement self-contained,
//! testable TUI components that can handle their own input and rendering.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Components are self-contained UI elements that manage their own state,
/// handle keyboard input, and can emit events to communicate with the parent.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Check if component should close.
    ///
    /// Default implementation returns `false`.
    fn should_close(&self) -> bool {
        false
    }
}

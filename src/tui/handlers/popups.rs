//! Popup input handlers.

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::tui::{
    ActiveComponent, AppState, Component, HelpOverlayEvent, PopupType, PromptValue,
    TextPromptEvent,
};

/// Handle input for help overlay
pub fn handle_help_overlay_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let event = match &mut state.active_component {
        Some(ActiveComponent::HelpOverlay(help)) => help.handle_input(key),
        _ => Some(HelpOverlayEvent::Closed),
    };

    if event == Some(HelpOverlayEvent::Closed) {
        state.close_component();
        state.set_status("Press ? for help");
    }
    Ok(false)
}

/// Apply a confirmed prompt value.
fn apply_prompt_value(state: &mut AppState, value: PromptValue) {
    match value {
        PromptValue::Time(target) => match state.session.jump_to_time(target) {
            Some(index) => state.set_status(format!("Jumped to frame {index} (t >= {target}s)")),
            None => state.set_status(format!("No frame at or after {target}s")),
        },
        PromptValue::Index(index) => {
            let selected = state.session.select_index(index);
            state.set_status(format!("Frame {selected}"));
        }
        PromptValue::Label(label) => super::actions::flag_current(state, &label),
        PromptValue::Path(path) => {
            state.load_file(&path);
        }
    }
}

/// Handle input for the text prompt
pub fn handle_text_prompt_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let event = match &mut state.active_component {
        Some(ActiveComponent::TextPrompt(prompt)) => prompt.handle_input(key),
        _ => Some(TextPromptEvent::Cancelled),
    };

    match event {
        Some(TextPromptEvent::Submitted(value)) => {
            state.close_component();
            apply_prompt_value(state, value);
        }
        Some(TextPromptEvent::Cancelled) => {
            state.close_component();
            state.set_status("Cancelled");
        }
        None => {}
    }
    Ok(false)
}

/// Handle input for the unexported flags prompt
pub fn handle_unexported_prompt_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('e' | 'E') => {
            // Export and quit; stay if the export failed
            state.active_popup = None;
            if state.export_flags() {
                state.should_quit = true;
                return Ok(true);
            }
            Ok(false)
        }
        KeyCode::Char('q' | 'Q') => {
            // Quit without exporting
            state.should_quit = true;
            Ok(true)
        }
        KeyCode::Esc => {
            state.active_popup = None;
            state.set_status("Cancelled");
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle input when popup is active (dispatcher)
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.active_popup {
        Some(PopupType::HelpOverlay) => handle_help_overlay_input(state, key),
        Some(PopupType::TextPrompt) => handle_text_prompt_input(state, key),
        Some(PopupType::UnexportedFlagsPrompt) => handle_unexported_prompt_input(state, key),
        None => Ok(false),
    }
}

//! Action dispatch for the main screen.

use anyhow::Result;

use crate::models::{FLAG_T_CUE, FLAG_T_FIRST_MOVEMENT};
use crate::shortcuts::Action;
use crate::tui::{AppState, PopupType, PromptPurpose, TextPrompt};

/// Frames moved by PageUp / PageDown.
const PAGE_STEP: isize = 10;

/// Flag the current frame with `label`.
pub(super) fn flag_current(state: &mut AppState, label: &str) {
    let index = state.session.current_index();
    if state.session.add_flag(index, label) {
        state.set_status(format!("Flagged frame {index} as {label}"));
    } else {
        state.set_status("No frames loaded");
    }
}

/// Quit now, or ask first when flags have not been exported.
pub(super) fn handle_quit(state: &mut AppState) -> Result<bool> {
    if state.session.is_dirty() {
        state.active_popup = Some(PopupType::UnexportedFlagsPrompt);
        Ok(false)
    } else {
        state.should_quit = true;
        Ok(true)
    }
}

/// Open a prompt that needs a loaded sequence.
fn open_frame_prompt(state: &mut AppState, purpose: PromptPurpose) {
    if state.session.has_frames() {
        state.open_prompt(TextPrompt::new(purpose));
    } else {
        state.set_status("No frames loaded");
    }
}

fn handle_clear_flag(state: &mut AppState) {
    let index = state.session.current_index();
    match state.session.clear_flag(index) {
        Some(label) => state.set_status(format!("Cleared flag {label} from frame {index}")),
        None => state.set_status(format!("Frame {index} has no flag")),
    }
}

fn handle_open_file(state: &mut AppState) {
    let prompt = match &state.source_path {
        Some(path) => TextPrompt::with_input(PromptPurpose::OpenFile, path.display().to_string()),
        None => TextPrompt::new(PromptPurpose::OpenFile),
    };
    state.open_prompt(prompt);
}

/// Dispatch an action to its handler.
///
/// Returns `Ok(true)` if the application should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // === NAVIGATION ===
        Action::PreviousFrame => {
            state.session.previous();
        }
        Action::NextFrame => {
            state.session.next();
        }
        Action::StepBack => {
            state.session.step(-PAGE_STEP);
        }
        Action::StepForward => {
            state.session.step(PAGE_STEP);
        }
        Action::JumpToFirst => {
            state.session.first();
        }
        Action::JumpToLast => {
            state.session.last();
        }
        Action::JumpToTime => open_frame_prompt(state, PromptPurpose::JumpToTime),
        Action::GoToFrame => open_frame_prompt(state, PromptPurpose::GoToFrame),

        // === FLAGS ===
        Action::FlagTCue => flag_current(state, FLAG_T_CUE),
        Action::FlagFirstMovement => flag_current(state, FLAG_T_FIRST_MOVEMENT),
        Action::FlagCustom => open_frame_prompt(state, PromptPurpose::FlagLabel),
        Action::ClearFlag => handle_clear_flag(state),

        // === FILE OPERATIONS ===
        Action::OpenFile => handle_open_file(state),
        Action::Export => {
            state.export_flags();
        }
        Action::Quit => return handle_quit(state),

        // === HELP ===
        Action::ToggleHelp => state.open_help_overlay(),

        // === GENERAL ===
        Action::Cancel => state.status_message.clear(),
    }
    Ok(false)
}

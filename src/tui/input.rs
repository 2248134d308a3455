// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (selection movement,
// filter editing, export-format cycling).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::protocol::UserCommand;
use crate::stats::position::{Position, KNOWN_POSITIONS};

use super::{PanelFocus, ViewState};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to
/// the app orchestrator (refresh, draft mutations, export, quit). Returns
/// `None` when the key press was handled locally by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Quit confirmation mode: only y/q confirm, everything else cancels.
    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    // Filter mode: capture printable characters and special keys.
    if view_state.filter_mode {
        return handle_filter_mode(key_event, view_state);
    }

    match key_event.code {
        // Refresh the dataset (draft board is preserved).
        KeyCode::Char('r') => Some(UserCommand::Refresh),

        // Search entry
        KeyCode::Char('/') => {
            view_state.filter_mode = true;
            None
        }

        // Escape clears filters and any transient message.
        KeyCode::Esc => {
            view_state.filter_text.clear();
            view_state.position_filter = None;
            view_state.status_message = None;
            view_state.clamp_selections();
            None
        }

        // Position filter cycling
        KeyCode::Char('p') => {
            cycle_position_filter(view_state);
            None
        }

        // Selection movement in the focused panel
        KeyCode::Up | KeyCode::Char('k') => {
            move_selection(view_state, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_selection(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            move_selection(view_state, -10);
            None
        }
        KeyCode::PageDown => {
            move_selection(view_state, 10);
            None
        }

        // Panel focus toggle
        KeyCode::Tab => {
            view_state.focus = match view_state.focus {
                PanelFocus::Rankings => PanelFocus::Drafted,
                PanelFocus::Drafted => PanelFocus::Rankings,
            };
            None
        }

        // Draft the selected player / undraft the selected drafted player.
        KeyCode::Char('d') | KeyCode::Enter => match view_state.focus {
            PanelFocus::Rankings => view_state.selected_player().map(UserCommand::Draft),
            PanelFocus::Drafted => view_state.selected_drafted().map(UserCommand::Undraft),
        },

        // Clear the whole draft board.
        KeyCode::Char('c') => Some(UserCommand::ClearDrafted),

        // Export format selector and export action.
        KeyCode::Char('e') => {
            view_state.export_format = view_state.export_format.cycled();
            None
        }
        KeyCode::Char('x') => Some(UserCommand::Export {
            format: view_state.export_format,
            filter: view_state.filter_set(),
        }),

        // Quit: enter confirmation mode instead of quitting immediately.
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// Handle key events while in quit confirmation mode.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('q') => Some(UserCommand::Quit),
        _ => {
            view_state.confirm_quit = false;
            None
        }
    }
}

/// Handle key events while the search input is active.
fn handle_filter_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Enter => {
            // Commit: keep the text, leave input mode.
            view_state.filter_mode = false;
            view_state.clamp_selections();
        }
        KeyCode::Esc => {
            // Cancel: clear the text, leave input mode.
            view_state.filter_text.clear();
            view_state.filter_mode = false;
            view_state.clamp_selections();
        }
        KeyCode::Backspace => {
            view_state.filter_text.pop();
            view_state.clamp_selections();
        }
        KeyCode::Char(c) => {
            view_state.filter_text.push(c);
            view_state.clamp_selections();
        }
        _ => {}
    }
    None
}

/// Cycle the position filter: None -> PG -> SG -> SF -> PF -> C -> None.
fn cycle_position_filter(view_state: &mut ViewState) {
    view_state.position_filter = match view_state.position_filter {
        None => Some(KNOWN_POSITIONS[0]),
        Some(current) => {
            let idx = KNOWN_POSITIONS.iter().position(|p| *p == current);
            match idx {
                Some(i) if i + 1 < KNOWN_POSITIONS.len() => Some(KNOWN_POSITIONS[i + 1]),
                _ => None,
            }
        }
    };
    view_state.clamp_selections();
}

/// Move the focused panel's selection by `delta`, clamped to its list.
fn move_selection(view_state: &mut ViewState, delta: i64) {
    let (current, len) = match view_state.focus {
        PanelFocus::Rankings => (view_state.selected, view_state.visible_len()),
        PanelFocus::Drafted => (view_state.drafted_selected, view_state.drafted.len()),
    };
    if len == 0 {
        return;
    }

    let target = (current as i64 + delta).clamp(0, len as i64 - 1) as usize;
    match view_state.focus {
        PanelFocus::Rankings => view_state.selected = target,
        PanelFocus::Drafted => view_state.drafted_selected = target,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

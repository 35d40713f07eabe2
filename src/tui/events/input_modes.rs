use crossterm::event::KeyCode;

use super::super::input::{cancel_username, submit_username};
use super::super::state::TuiState;

/// Handle keystrokes while the username box has focus.
pub(super) fn handle_username_input(code: KeyCode, state: &mut TuiState) {
    match code {
        KeyCode::Esc => cancel_username(state),
        KeyCode::Enter => submit_username(state),
        KeyCode::Backspace => {
            state.input.pop();
        }
        KeyCode::Char(c) => state.input.push(c),
        _ => {}
    }
}

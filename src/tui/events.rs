use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::config::AppConfig;

use super::input::{jump_first, jump_last, move_down, move_up, page_down, page_up};
use super::state::TuiState;

mod actions;
mod input_modes;

pub use actions::reload;
use actions::*;
use input_modes::*;

/// Handle a keyboard event, mutating TUI state and returning `true` if the loop should exit.
pub fn handle_key_events(key_event: KeyEvent, state: &mut TuiState, config: &AppConfig) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        return true;
    }

    if state.input_mode {
        handle_username_input(key_event.code, state);
        return false;
    }

    if state.show_help {
        if matches!(
            key_event.code,
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1)
        ) {
            state.show_help = false;
        }
        return false;
    }

    match key_event.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('h') | KeyCode::F(1) => state.show_help = true,
        KeyCode::Char('/') | KeyCode::Char('i') => {
            state.input_mode = true;
            state.input = state.username.clone();
        }
        KeyCode::Char('r') => state.reload_requested = true,
        KeyCode::Char('d') => export_csv(state, config),
        KeyCode::Char('y') => copy_selected_url(state),
        KeyCode::Up | KeyCode::Char('k') => move_up(state),
        KeyCode::Down | KeyCode::Char('j') => move_down(state),
        KeyCode::Char('g') | KeyCode::Home => jump_first(state),
        KeyCode::Char('G') | KeyCode::End => jump_last(state),
        KeyCode::PageUp => page_up(state),
        KeyCode::PageDown => page_down(state),
        _ => {}
    }

    false
}

/// Mouse wheel scrolls the repository list.
pub fn handle_mouse_event(mouse_event: MouseEvent, state: &mut TuiState) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => move_up(state),
        MouseEventKind::ScrollDown => move_down(state),
        _ => {}
    }
}

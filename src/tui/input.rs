use super::TuiState;
use crate::error::{DashError, Result};

/// Keep the repository selection inside the current list.
pub fn clamp_selection(state: &mut TuiState) {
    let len = state.repo_count();
    if len == 0 {
        state.selected = 0;
    } else if state.selected >= len {
        state.selected = len - 1;
    }
}

pub fn move_up(state: &mut TuiState) {
    state.selected = state.selected.saturating_sub(1);
}

pub fn move_down(state: &mut TuiState) {
    if state.selected + 1 < state.repo_count() {
        state.selected += 1;
    }
}

pub fn jump_first(state: &mut TuiState) {
    state.selected = 0;
}

pub fn jump_last(state: &mut TuiState) {
    state.selected = state.repo_count().saturating_sub(1);
}

pub fn page_up(state: &mut TuiState) {
    state.selected = state.selected.saturating_sub(10);
}

pub fn page_down(state: &mut TuiState) {
    state.selected = std::cmp::min(state.selected + 10, state.repo_count().saturating_sub(1));
}

/// Commit the edited username and queue a fresh pipeline run.
pub fn submit_username(state: &mut TuiState) {
    state.input_mode = false;
    state.username = state.input.trim().to_string();
    state.input = state.username.clone();
    state.reload_requested = true;
}

pub fn cancel_username(state: &mut TuiState) {
    state.input_mode = false;
    state.input = state.username.clone();
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| DashError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| DashError::Clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::page::render;
    use crate::page::tests::octocat;
    use crate::stats::tests::repo;

    fn state_with_repos(n: u64) -> TuiState {
        let mut state = TuiState::new("octocat");
        let repos = (0..n).map(|i| repo(&format!("r{i}"), i, None)).collect();
        state.set_page(render("octocat", Some(octocat()), repos, &AppConfig::default()));
        state.reload_requested = false;
        state
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = state_with_repos(3);
        move_up(&mut state);
        assert_eq!(state.selected, 0);
        move_down(&mut state);
        move_down(&mut state);
        move_down(&mut state);
        assert_eq!(state.selected, 2);
        page_up(&mut state);
        assert_eq!(state.selected, 0);
        page_down(&mut state);
        assert_eq!(state.selected, 2);
        jump_first(&mut state);
        assert_eq!(state.selected, 0);
        jump_last(&mut state);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn clamp_after_list_shrinks() {
        let mut state = state_with_repos(12);
        state.selected = 11;
        state.set_page(crate::page::Page::Idle);
        state.selected = 4;
        clamp_selection(&mut state);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn submit_trims_and_requests_reload() {
        let mut state = state_with_repos(1);
        state.input_mode = true;
        state.input = "  torvalds ".to_string();
        submit_username(&mut state);
        assert!(!state.input_mode);
        assert_eq!(state.username, "torvalds");
        assert!(state.reload_requested);
    }

    #[test]
    fn cancel_restores_previous_username() {
        let mut state = state_with_repos(1);
        state.input_mode = true;
        state.input = "half-typed".to_string();
        cancel_username(&mut state);
        assert_eq!(state.input, "octocat");
        assert!(!state.reload_requested);
    }
}

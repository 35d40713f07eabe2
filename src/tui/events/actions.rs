use crate::config::AppConfig;
use crate::github::GitHubApi;
use crate::page::{self, Page};

use super::super::input::{clamp_selection, copy_to_clipboard};
use super::super::state::TuiState;

/// Re-run the whole pipeline for the current username.
pub fn reload<A: GitHubApi + ?Sized>(state: &mut TuiState, api: &A, config: &AppConfig) {
    state.reload_requested = false;
    tracing::debug!(username = %state.username, "loading page");
    let page = page::load(api, &state.username, config);
    state.set_page(page);
    clamp_selection(state);
    match &state.page {
        Page::Dashboard(d) => {
            let message = format!("Loaded {} repositories", d.repositories.len());
            state.set_status(message);
        }
        _ => state.status_message = None,
    }
}

/// Write the CSV download for the current page into the configured directory.
pub(super) fn export_csv(state: &mut TuiState, config: &AppConfig) {
    let result = match &state.page {
        Page::Dashboard(d) => d.csv.write_to(&config.output_dir),
        _ => {
            state.set_status("Nothing to export");
            return;
        }
    };
    match result {
        Ok(path) => state.set_status(format!("Saved {}", path.display())),
        Err(e) => state.set_status(format!("Export error: {e}")),
    }
}

/// Copy the selected repository's URL, surfacing clipboard errors in status.
pub(super) fn copy_selected_url(state: &mut TuiState) {
    let Some(url) = state
        .page
        .repositories()
        .get(state.selected)
        .map(|r| r.html_url.clone())
    else {
        return;
    };
    match copy_to_clipboard(&url) {
        Ok(()) => state.set_status(format!("Copied: {url}")),
        Err(e) => state.set_status(format!("{e}")),
    }
}

use std::time::{Duration, Instant};

use crate::page::Page;

pub const STATUS_TTL: Duration = Duration::from_secs(4);

pub struct TuiState {
    /// Username the current page was loaded for.
    pub username: String,
    /// Text in the username box; only differs from `username` while editing.
    pub input: String,
    pub input_mode: bool,
    pub page: Page,
    pub selected: usize,
    pub show_help: bool,
    pub reload_requested: bool,
    pub status_message: Option<(String, Instant)>,
}

impl TuiState {
    /// Initial state: the default username is pre-filled and queued for loading.
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            input: username.to_string(),
            input_mode: false,
            page: Page::Idle,
            selected: 0,
            show_help: false,
            reload_requested: true,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn active_status(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, at)| at.elapsed() < STATUS_TTL)
            .map(|(msg, _)| msg.as_str())
    }

    /// Install a freshly loaded page, resetting the list selection.
    pub fn set_page(&mut self, page: Page) {
        self.page = page;
        self.selected = 0;
    }

    pub fn repo_count(&self) -> usize {
        self.page.repositories().len()
    }
}

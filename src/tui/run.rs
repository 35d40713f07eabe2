use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use super::events::{handle_key_events, handle_mouse_event, reload};
use super::state::TuiState;
use super::views::draw_app;
use crate::cli::CommonArgs;
use crate::config::AppConfig;
use crate::error::{DashError, Result};
use crate::github::{GitHubApi, GitHubClient};

pub fn exec(common: CommonArgs, username: Option<String>) -> anyhow::Result<()> {
    let config = AppConfig::from_args(&common);
    let client = GitHubClient::new(&config).context("Failed to build HTTP client")?;
    let username = username.unwrap_or_else(|| config.default_username.clone());
    run(&config, &client, &username).map_err(|e| anyhow::anyhow!(e))
}

/// Take over the terminal and run the dashboard until the user quits.
pub fn run<A: GitHubApi + ?Sized>(config: &AppConfig, api: &A, username: &str) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, config, api, username);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend, A: GitHubApi + ?Sized>(
    terminal: &mut Terminal<B>,
    config: &AppConfig,
    api: &A,
    username: &str,
) -> Result<()> {
    let mut state = TuiState::new(username);
    terminal.clear()?;

    loop {
        if state.reload_requested {
            // Fetches block, so show the pending state before issuing them.
            state.set_status(format!("Fetching {}...", state.username));
            draw(terminal, &state, config)?;
            reload(&mut state, api, config);
        }

        draw(terminal, &state, config)?;

        if poll(Duration::from_millis(200))? {
            match read()? {
                Event::Key(key_event) => {
                    if handle_key_events(key_event, &mut state, config) {
                        break;
                    }
                }
                Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, &mut state),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, state: &TuiState, config: &AppConfig) -> Result<()> {
    terminal
        .draw(|f| draw_app(f, state, &config.page_title))
        .map_err(|e| DashError::Terminal(e.to_string()))?;
    Ok(())
}

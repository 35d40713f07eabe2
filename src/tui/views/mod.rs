use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Wrap};
use ratatui::Frame;

use crate::page::{self, Page};

use super::layout::{dashboard_areas, screen_areas};
use super::state::TuiState;

mod header;
mod help;
mod languages;
mod profile;
mod repos;
mod top;

pub use header::{draw_input, draw_status, draw_title};
pub use help::draw_help_overlay;
pub use languages::draw_languages;
pub use profile::draw_profile;
pub use repos::draw_repositories;
pub use top::draw_top;

/// Render one frame: title, username box, the page body, status line, and
/// the help overlay when it is open.
pub fn draw_app(f: &mut Frame, state: &TuiState, title: &str) {
    let size = f.size();
    let areas = screen_areas(size);

    draw_title(f, areas.title, title);
    draw_input(f, areas.input, state);
    draw_status(f, areas.status, state);

    let body = areas.body;
    match &state.page {
        Page::Idle => {
            let hint = Paragraph::new("Enter a GitHub username to get started (press / to edit).")
                .style(Style::default().fg(Color::Gray));
            f.render_widget(hint, body);
        }
        Page::NotFound { .. } => {
            let error = Paragraph::new(page::NOT_FOUND_MESSAGE)
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .block(Block::default().title("Error").borders(Borders::ALL));
            f.render_widget(error, body);
        }
        Page::NoRepositories { profile } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(7), Constraint::Min(0)])
                .split(body);
            draw_profile(f, chunks[0], profile);
            let warning = Paragraph::new(page::NO_REPOS_MESSAGE)
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Repositories").borders(Borders::ALL));
            f.render_widget(warning, chunks[1]);
        }
        Page::Dashboard(dashboard) => {
            let areas = dashboard_areas(body, dashboard.top.len() as u16);
            draw_profile(f, areas.profile, &dashboard.profile);
            draw_repositories(f, areas.repositories, dashboard, state.selected);
            draw_top(f, areas.top, dashboard);
            draw_languages(f, areas.languages, dashboard);
        }
    }

    if state.show_help {
        draw_help_overlay(f, size);
    }
}

/// Convenience helper to build a styled table header cell.
pub(crate) fn header_cell(text: &str, color: Color) -> Cell<'static> {
    Cell::from(text.to_string()).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Truncate a string to `max` chars with an ellipsis when necessary.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::page::render;
    use crate::page::tests::octocat;
    use crate::stats::tests::repo;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(state: &TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| draw_app(f, state, "GitHub Profile Analyzer"))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ünïcödé-name-here", 8), "ünïcö...");
    }

    #[test]
    fn not_found_shows_only_the_error() {
        let mut state = TuiState::new("ghost");
        state.set_page(Page::NotFound {
            username: "ghost".to_string(),
        });
        let text = screen_text(&state);
        assert!(text.contains("GitHub Profile Analyzer"));
        assert!(text.contains("GitHub user not found!"));
        assert!(!text.contains("Language Distribution"));
    }

    #[test]
    fn empty_repositories_show_profile_and_warning() {
        let mut state = TuiState::new("octocat");
        state.set_page(render("octocat", Some(octocat()), Vec::new(), &AppConfig::default()));
        let text = screen_text(&state);
        assert!(text.contains("The Octocat"));
        assert!(text.contains("Followers: 100"));
        assert!(text.contains("No repositories found"));
    }

    #[test]
    fn full_dashboard_has_every_section() {
        let mut state = TuiState::new("octocat");
        let repos = vec![
            repo("five", 5, Some("Ruby")),
            repo("one", 1, None),
            repo("nine", 9, Some("Shell")),
        ];
        state.set_page(render("octocat", Some(octocat()), repos, &AppConfig::default()));
        let text = screen_text(&state);
        assert!(text.contains("Repositories (sorted by stars)"));
        assert!(text.contains("Top 3 Repositories"));
        assert!(text.contains("Language Distribution"));
        assert!(text.contains("Stars: 9 | Forks: 4 | Language: Shell"));

        let nine = text.find("nine").unwrap();
        let five = text.find("five").unwrap();
        assert!(nine < five);
    }

    #[test]
    fn help_overlay_lists_keys() {
        let mut state = TuiState::new("octocat");
        state.show_help = true;
        let text = screen_text(&state);
        assert!(text.contains("Download CSV"));
    }
}

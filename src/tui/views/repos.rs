use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::page::Dashboard;

/// Full repository list, most starred first. Each entry is four lines:
/// name and link, counters, description, separator.
pub fn draw_repositories(f: &mut Frame, area: Rect, dashboard: &Dashboard, selected: usize) {
    let separator_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = dashboard
        .repositories
        .iter()
        .map(|repo| {
            let text = Text::from(vec![
                Line::from(vec![
                    Span::styled(
                        repo.name.clone(),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        repo.html_url.clone(),
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "Stars: {} | Forks: {} | Language: {}",
                        repo.stargazers_count,
                        repo.forks_count,
                        repo.language.as_deref().unwrap_or("-")
                    ),
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(Span::styled(
                    repo.description.clone().unwrap_or_default(),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    "─".repeat(separator_width),
                    Style::default().fg(Color::DarkGray),
                )),
            ]);
            ListItem::new(text)
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    let list = List::new(items)
        .block(
            Block::default()
                .title("Repositories (sorted by stars)")
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("▌");
    f.render_stateful_widget(list, area, &mut list_state);
}

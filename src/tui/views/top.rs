use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use super::super::draw::{star_bar, star_color};
use super::{header_cell, truncate};
use crate::page::Dashboard;

/// Top-N highlight table.
pub fn draw_top(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let max_stars = dashboard
        .top
        .first()
        .map(|r| r.stargazers_count)
        .unwrap_or(0);

    let rows: Vec<Row> = dashboard
        .top
        .iter()
        .enumerate()
        .map(|(i, repo)| {
            let style = star_color(repo.stargazers_count, max_stars);
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(truncate(&repo.name, 24)).style(Style::default().fg(Color::White)),
                Cell::from(format!(
                    "{:>5} {}",
                    repo.stargazers_count,
                    star_bar(repo.stargazers_count, max_stars)
                ))
                .style(style),
                Cell::from(repo.language.clone().unwrap_or_else(|| "-".to_string()))
                    .style(Style::default().fg(Color::Magenta)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(12),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(Row::new([
        header_cell("#", Color::Yellow),
        header_cell("Name", Color::Yellow),
        header_cell("Stars", Color::Green),
        header_cell("Language", Color::Cyan),
    ]))
    .block(
        Block::default()
            .title(format!("Top {} Repositories", dashboard.top.len()))
            .borders(Borders::ALL),
    );
    f.render_widget(table, area);
}

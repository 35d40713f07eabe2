use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::page::Dashboard;

/// Horizontal bar chart of repositories per language.
pub fn draw_languages(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let block = Block::default()
        .title("Language Distribution")
        .borders(Borders::ALL);

    if dashboard.languages.is_empty() {
        f.render_widget(
            Paragraph::new("No language information").block(block),
            area,
        );
        return;
    }

    let bars: Vec<Bar> = dashboard
        .languages
        .iter()
        .map(|entry| {
            Bar::default()
                .value(entry.repositories as u64)
                .label(Line::from(entry.language.clone()))
                .style(Style::default().fg(Color::Green))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

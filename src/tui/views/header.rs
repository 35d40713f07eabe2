use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::super::state::TuiState;

pub fn draw_title(f: &mut Frame, area: Rect, title: &str) {
    let line = Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]);
    f.render_widget(Paragraph::new(line), area);
}

/// The username box. While editing it is highlighted and owns the cursor.
pub fn draw_input(f: &mut Frame, area: Rect, state: &TuiState) {
    let (border_style, title) = if state.input_mode {
        (
            Style::default().fg(Color::Yellow),
            "Enter GitHub username: (Enter to load, Esc to cancel)",
        )
    } else {
        (Style::default().fg(Color::White), "Enter GitHub username:")
    };
    let input = Paragraph::new(state.input.as_str()).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(input, area);

    if state.input_mode {
        let width = state.input.chars().count() as u16;
        let x = (area.x + 1 + width).min(area.x + area.width.saturating_sub(2));
        f.set_cursor(x, area.y + 1);
    }
}

pub fn draw_status(f: &mut Frame, area: Rect, state: &TuiState) {
    let line = match state.active_status() {
        Some(message) => Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Cyan),
        )),
        None => Line::from(Span::styled(
            "/ edit  r reload  j/k move  d download CSV  y copy URL  h help  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

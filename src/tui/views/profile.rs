use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::page::ProfileSection;

/// Profile header: display name, avatar link, bio, and the three counters.
pub fn draw_profile(f: &mut Frame, area: Rect, profile: &ProfileSection) {
    let label = Style::default().fg(Color::White);
    let value = Style::default().fg(Color::Cyan);

    let lines = vec![
        Line::from(vec![Span::styled(
            profile.display_name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("Avatar: ", label),
            Span::styled(
                profile.avatar_url.clone().unwrap_or_else(|| "-".to_string()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Bio: ", label),
            Span::styled(profile.bio.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("Public Repos: ", label),
            Span::styled(profile.public_repos.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Followers: ", label),
            Span::styled(profile.followers.clone(), value),
            Span::styled(" | ", label),
            Span::styled("Following: ", label),
            Span::styled(profile.following.clone(), value),
        ]),
    ];

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Profile").borders(Borders::ALL));
    f.render_widget(para, area);
}

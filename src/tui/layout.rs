use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Areas of the main screen, top to bottom.
pub struct ScreenAreas {
    pub title: Rect,
    pub input: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    ScreenAreas {
        title: chunks[0],
        input: chunks[1],
        body: chunks[2],
        status: chunks[3],
    }
}

/// Split the dashboard body: profile on top, repository list on the left,
/// top-N table and language chart stacked on the right.
pub struct DashboardAreas {
    pub profile: Rect,
    pub repositories: Rect,
    pub top: Rect,
    pub languages: Rect,
}

pub fn dashboard_areas(body: Rect, top_rows: u16) -> DashboardAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(top_rows + 3), Constraint::Min(0)])
        .split(columns[1]);
    DashboardAreas {
        profile: rows[0],
        repositories: columns[0],
        top: right[0],
        languages: right[1],
    }
}

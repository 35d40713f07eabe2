use ratatui::style::{Color, Modifier, Style};

const LEVELS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Returns a compact popularity bar of fixed width (5) based on stars/max.
pub fn star_bar(stars: u64, max: u64) -> String {
    const WIDTH: usize = 5;
    if max == 0 {
        return "▁".repeat(WIDTH);
    }

    let ratio = stars as f64 / max as f64;
    let filled = ((ratio * WIDTH as f64).round() as usize).min(WIDTH);
    let level = ((ratio * (LEVELS.len() - 1) as f64).round() as usize).min(LEVELS.len() - 1);

    LEVELS[level].repeat(filled) + &"░".repeat(WIDTH - filled)
}

/// Chooses a style/color based on a repository's stars relative to the most starred one.
pub fn star_color(stars: u64, max: u64) -> Style {
    if max == 0 {
        return Style::default().fg(Color::White);
    }

    let ratio = stars as f64 / max as f64;
    if ratio > 0.8 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if ratio > 0.5 {
        Style::default().fg(Color::Green)
    } else if ratio > 0.2 {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_with_ratio() {
        assert_eq!(star_bar(0, 0), "▁▁▁▁▁");
        assert_eq!(star_bar(10, 10), "█████");
        assert_eq!(star_bar(0, 10), "░░░░░");
        assert_eq!(star_bar(5, 10).chars().count(), 5);
    }

    #[test]
    fn most_starred_is_highlighted() {
        assert!(star_color(10, 10).add_modifier.contains(Modifier::BOLD));
        assert_eq!(star_color(1, 10).fg, Some(Color::Blue));
    }
}

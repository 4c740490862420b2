use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::style::Theme;

const HELP_ITEMS: &[(&str, &str)] = &[
    ("q/Esc", "Quit / Deselect"),
    ("?", "Toggle help"),
    ("g", "Refresh"),
    ("", ""),
    ("j/Down", "Select next"),
    ("k/Up", "Select previous"),
    ("h/Left", "Deselect"),
    ("", ""),
    ("d", "Delete task"),
    ("r", "Run task"),
    ("x", "Stop task"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 70, area);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = HELP_ITEMS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", key), Theme::help_key()),
                Span::styled(*desc, Theme::help_desc()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Help ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rect using given percentage of the available area
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

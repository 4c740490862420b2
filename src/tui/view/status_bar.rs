use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::state::AppState;

use super::style::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let left_text = match state.drilldown.selected_task() {
        Some(task) => format!(" Task: {} ", task.name),
        None => {
            let count = state.drilldown.master.tasks.len();
            format!(" {} tasks ", count)
        }
    };

    let help_hint = " Press ? for help ";

    let message = state
        .status_message
        .as_ref()
        .map(|m| m.text.as_str())
        .unwrap_or("");

    let message_style = if state
        .status_message
        .as_ref()
        .map(|m| m.is_error)
        .unwrap_or(false)
    {
        Theme::status_error()
    } else {
        Theme::status_message()
    };

    let pad = padding(area.width as usize, &[&left_text, message, help_hint]);

    let line = Line::from(vec![
        Span::styled(left_text, Theme::status_bar()),
        Span::styled(message, message_style),
        Span::styled(" ".repeat(pad), Theme::status_bar()),
        Span::styled(help_hint, Theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(line).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}

// Spacing between the left segments and the right-aligned help hint.
// Counted in chars, not bytes, so multibyte names keep the hint flush
// right.
fn padding(total_width: usize, segments: &[&str]) -> usize {
    let used: usize = segments.iter().map(|s| s.chars().count()).sum();
    total_width.saturating_sub(used)
}

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::Strings;
use crate::tui::state::TaskListState;

use super::style::{format_state, Theme};

pub fn render(frame: &mut Frame, area: Rect, state: &TaskListState, strings: &Strings) {
    let items: Vec<ListItem> = state
        .tasks
        .iter()
        .map(|task| {
            let (state_text, state_style) = format_state(task.state);

            let line = Line::from(vec![
                Span::styled(format!("{:>4} ", task.id), Theme::dimmed()),
                Span::styled(
                    format!("{:<18}", truncate(&task.name, 18)),
                    Theme::normal(),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("{:<14}", truncate(&task.kind, 14)),
                    Theme::dimmed(),
                ),
                Span::raw(" "),
                Span::styled(format!("{:<8}", state_text), state_style),
                Span::raw(" "),
                Span::styled(
                    task.last_result.clone().unwrap_or_default(),
                    Theme::dimmed(),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(strings.get("tasks.list.title"))
                .title_style(Theme::title())
                .borders(Borders::ALL)
                .border_style(Theme::border_focused()),
        )
        .highlight_style(Theme::selected())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(state.selected);

    frame.render_stateful_widget(list, area, &mut list_state);
}

// Truncates on char boundaries; names are user-supplied and may be
// multibyte.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{head}..")
    }
}

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::Strings;
use crate::model::TaskRecord;
use crate::tui::state::DetailTab;

use super::style::{format_state, Theme};

/// Read-only summary of the selected task. Renders a placeholder when
/// nothing is selected rather than failing.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tab: &DetailTab,
    task: Option<&TaskRecord>,
    strings: &Strings,
) {
    let block = Block::default()
        .title(strings.get(tab.title_key))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let lines = match task {
        Some(task) => summary_lines(task),
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                strings.get("tasks.summary.empty"),
                Theme::dimmed(),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn summary_lines(task: &TaskRecord) -> Vec<Line<'_>> {
    let (state_text, state_style) = format_state(task.state);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name:        ", Theme::dimmed()),
            Span::styled(task.name.as_str(), Theme::highlight()),
        ]),
        Line::from(vec![
            Span::styled("Id:          ", Theme::dimmed()),
            Span::raw(task.id.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Type:        ", Theme::dimmed()),
            Span::raw(task.kind.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Status:      ", Theme::dimmed()),
            Span::styled(state_text, state_style),
        ]),
        Line::from(vec![
            Span::styled("Schedule:    ", Theme::dimmed()),
            Span::raw(task.schedule.as_deref().unwrap_or("manual")),
        ]),
        Line::from(vec![
            Span::styled("Last run:    ", Theme::dimmed()),
            Span::raw(format_timestamp(task.last_run)),
        ]),
        Line::from(vec![
            Span::styled("Last result: ", Theme::dimmed()),
            Span::raw(task.last_result.as_deref().unwrap_or("--")),
        ]),
    ];

    if let Some(started) = task.started_at {
        lines.push(Line::from(vec![
            Span::styled("Started:     ", Theme::dimmed()),
            Span::raw(format_timestamp(Some(started))),
        ]));
    }

    lines
}

fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "--".to_string())
}

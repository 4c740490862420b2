use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::Strings;
use crate::tui::event::ActionId;
use crate::tui::state::DrilldownState;

use super::style::Theme;

/// Render the Delete / Run / Stop buttons. Enablement is read off the
/// descriptors against the current selection on every draw; nothing here
/// holds button state of its own.
pub fn render(frame: &mut Frame, area: Rect, drilldown: &DrilldownState, strings: &Strings) {
    let selection = drilldown.selected_task();
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    for action in drilldown.actions() {
        let enabled = action.is_enabled(selection);
        let key = key_hint(action.id);

        let (key_style, label_style) = if enabled {
            (Theme::help_key(), Theme::button_enabled())
        } else {
            (Theme::button_disabled(), Theme::button_disabled())
        };

        spans.push(Span::styled(format!("[{key}]"), key_style));
        spans.push(Span::styled(
            format!(" {} {}", action.glyph, strings.get(action.label_key)),
            label_style,
        ));
        spans.push(Span::raw("   "));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn key_hint(id: ActionId) -> char {
    match id {
        ActionId::Delete => 'd',
        ActionId::Run => 'r',
        ActionId::Stop => 'x',
    }
}

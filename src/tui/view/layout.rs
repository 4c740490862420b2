use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::i18n::Strings;
use crate::tui::state::{AppState, ModalState};

use super::{action_bar, confirm_popup, help_popup, status_bar, summary_tab, task_list};

/// Drilldown composition: the master list is always present, the summary
/// tab appears beside it while a selection exists, and the action bar and
/// status bar sit below at all times.
pub fn render(frame: &mut Frame, state: &AppState, strings: &Strings) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(area);

    let content_area = chunks[0];
    let actions_area = chunks[1];
    let status_area = chunks[2];

    render_content(frame, content_area, state, strings);
    action_bar::render(frame, actions_area, &state.drilldown, strings);
    status_bar::render(frame, status_area, state);

    // Render modal on top if present
    if let Some(modal) = &state.modal {
        match modal {
            ModalState::Help => {
                help_popup::render(frame, area);
            }
            ModalState::Confirm { task_name, .. } => {
                confirm_popup::render(frame, area, task_name, strings);
            }
        }
    }
}

fn render_content(frame: &mut Frame, area: Rect, state: &AppState, strings: &Strings) {
    let Some(tab) = state.drilldown.tabs().first() else {
        task_list::render(frame, area, &state.drilldown.master, strings);
        return;
    };

    if state.drilldown.detail_visible() {
        let cols =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(area);
        task_list::render(frame, cols[0], &state.drilldown.master, strings);
        summary_tab::render(frame, cols[1], tab, state.drilldown.selected_task(), strings);
    } else {
        task_list::render(frame, area, &state.drilldown.master, strings);
    }
}

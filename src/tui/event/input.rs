use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Action, ActionId};
use crate::tui::state::{AppState, ModalState};

/// Convert a key event to an action based on current state
pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<Action> {
    // Handle modal first
    if let Some(modal) = &state.modal {
        return handle_modal_key(key, modal);
    }

    // Check for Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Quit, or collapse the detail region first if one is open
        KeyCode::Char('q') | KeyCode::Esc => {
            if state.drilldown.detail_visible() {
                Some(Action::Deselect)
            } else {
                Some(Action::Quit)
            }
        }

        // Selection
        KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::Deselect),

        // Action bar: only enabled buttons can be activated
        KeyCode::Char('d') => invoke_if_enabled(state, ActionId::Delete),
        KeyCode::Char('r') => invoke_if_enabled(state, ActionId::Run),
        KeyCode::Char('x') => invoke_if_enabled(state, ActionId::Stop),

        // Help
        KeyCode::Char('?') => Some(Action::ShowHelp),

        // Refresh
        KeyCode::Char('g') => Some(Action::Refresh),

        _ => None,
    }
}

fn invoke_if_enabled(state: &AppState, id: ActionId) -> Option<Action> {
    if state.drilldown.action_enabled(id) {
        Some(Action::Invoke(id))
    } else {
        None
    }
}

fn handle_modal_key(key: KeyEvent, modal: &ModalState) -> Option<Action> {
    match modal {
        ModalState::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                Some(Action::HideModal)
            }
            _ => None,
        },
        ModalState::Confirm { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(Action::ConfirmYes),
            KeyCode::Char('n') | KeyCode::Esc | KeyCode::Char('q') => Some(Action::ConfirmNo),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RunState, TaskRecord};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn make_task(id: u64, state: RunState) -> TaskRecord {
        let mut task = TaskRecord::new(id, format!("task{id}"), "script".to_string(), 30);
        task.state = state;
        task.refresh_eligibility();
        task
    }

    #[test]
    fn test_disabled_action_key_produces_nothing() {
        // No selection: every action key is dead
        let state = AppState::with_tasks(vec![make_task(1, RunState::Waiting)]);
        assert_eq!(handle_key_event(key('d'), &state), None);
        assert_eq!(handle_key_event(key('r'), &state), None);
        assert_eq!(handle_key_event(key('x'), &state), None);
    }

    #[test]
    fn test_action_keys_respect_enablement() {
        let state = AppState::with_tasks(vec![make_task(1, RunState::Running)]);
        let state = crate::tui::state::reducer::reduce(state, Action::SelectNext);

        assert_eq!(
            handle_key_event(key('d'), &state),
            Some(Action::Invoke(ActionId::Delete))
        );
        // Running: Run disabled, Stop enabled
        assert_eq!(handle_key_event(key('r'), &state), None);
        assert_eq!(
            handle_key_event(key('x'), &state),
            Some(Action::Invoke(ActionId::Stop))
        );
    }

    #[test]
    fn test_escape_deselects_before_quitting() {
        let state = AppState::with_tasks(vec![make_task(1, RunState::Waiting)]);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handle_key_event(esc, &state), Some(Action::Quit));

        let state = crate::tui::state::reducer::reduce(state, Action::SelectNext);
        assert_eq!(handle_key_event(esc, &state), Some(Action::Deselect));
    }

    #[test]
    fn test_confirm_modal_keys() {
        let state = AppState::with_tasks(vec![make_task(1, RunState::Waiting)]);
        let state = crate::tui::state::reducer::reduce(state, Action::SelectNext);
        let state =
            crate::tui::state::reducer::reduce(state, Action::Invoke(ActionId::Delete));

        assert_eq!(handle_key_event(key('y'), &state), Some(Action::ConfirmYes));
        assert_eq!(handle_key_event(key('n'), &state), Some(Action::ConfirmNo));
        assert_eq!(handle_key_event(key('z'), &state), None);
    }
}
